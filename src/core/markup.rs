// HTML builders for the static sections. Each section is a pure mapping
// from the records in `content` to a markup string; the web layer inserts
// the result once and then binds behavior by element id.

use super::content::*;
use std::fmt::Write;

// Element ids the web layer binds to
pub const ID_CURSOR_DOT: &str = "cursor-dot";
pub const ID_CURSOR_RING: &str = "cursor-ring";
pub const ID_PROGRESS_FILL: &str = "scroll-progress";
pub const ID_NAVBAR: &str = "navbar";
pub const ID_MENU_BUTTON: &str = "menu-toggle";
pub const ID_MOBILE_MENU: &str = "mobile-menu";
pub const ID_PARTICLE_CANVAS: &str = "particle-canvas";
pub const ID_CONTACT_NAME: &str = "contact-name";
pub const ID_CONTACT_EMAIL: &str = "contact-email";
pub const ID_CONTACT_MESSAGE: &str = "contact-message";
pub const ID_CONTACT_SUBMIT: &str = "contact-submit";
pub const ID_CONTACT_STATUS: &str = "contact-status";

// Class hooks toggled at runtime
pub const CLASS_MOBILE_LINK: &str = "mobile-link";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_NAV_SCROLLED: &str = "nav-scrolled";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn cursor_layers() -> String {
    format!(
        "<div id=\"{ID_CURSOR_DOT}\" class=\"cursor-dot\"></div>\
         <div id=\"{ID_CURSOR_RING}\" class=\"cursor-ring\"></div>"
    )
}

pub fn progress_bar() -> String {
    format!(
        "<div class=\"progress-track\"><div id=\"{ID_PROGRESS_FILL}\" class=\"progress-fill\" style=\"width: 0%\"></div></div>"
    )
}

fn nav_links(out: &mut String, link_class: &str) {
    for link in NAV_LINKS.iter() {
        _ = write!(
            out,
            "<a href=\"#{}\" class=\"{}\">{}</a>",
            link.anchor,
            link_class,
            escape_html(link.label)
        );
    }
}

pub fn navbar() -> String {
    let mut out = String::new();
    _ = write!(
        out,
        "<nav id=\"{ID_NAVBAR}\" class=\"navbar\"><div class=\"nav-inner\">\
         <div class=\"brand\"><img src=\"{}\" alt=\"Sahra Ali Hersi Logo\" class=\"brand-logo\"/>\
         <span class=\"cinzel brand-title\">{}</span></div><div class=\"nav-links\">",
        escape_html(LOGO_URL),
        escape_html(SITE_TITLE)
    );
    nav_links(&mut out, "nav-link");
    _ = write!(
        out,
        "</div><button id=\"{ID_MENU_BUTTON}\" class=\"menu-toggle\" aria-expanded=\"false\">Menu</button></div>\
         <div id=\"{ID_MOBILE_MENU}\" class=\"mobile-menu {CLASS_HIDDEN}\">"
    );
    nav_links(&mut out, &format!("nav-link {CLASS_MOBILE_LINK}"));
    out.push_str("</div></nav>");
    out
}

pub fn hero() -> String {
    format!(
        "<section id=\"hero\" class=\"hero\">\
         <canvas id=\"{ID_PARTICLE_CANVAS}\" class=\"particle-canvas\"></canvas>\
         <div class=\"hero-content\">\
         <div class=\"hero-logo\"><img src=\"{logo}\" alt=\"Sahra Ali Hersi Matriarchal Heritage Logo\" class=\"interactive\"/>\
         <span class=\"cinzel badge\">MATRIARCH</span></div>\
         <h1 class=\"cinzel\"><span class=\"gold\">SAHRA ALI HERSI</span><br/>MAMA HERSI</h1>\
         <p class=\"cinzel tagline\">{tagline}</p>\
         <p class=\"hero-quote\">{quote}</p>\
         <div class=\"hero-actions\">\
         <a href=\"#story\" class=\"btn-primary\">Explore Heritage</a>\
         <a href=\"#institution\" class=\"btn-outline\">The Institution</a>\
         </div></div>\
         <a href=\"#story\" class=\"scroll-hint\" aria-label=\"Scroll down\">&#8595;</a>\
         </section>",
        logo = escape_html(LOGO_URL),
        tagline = escape_html(TAGLINE),
        quote = escape_html(HERO_QUOTE),
    )
}

pub fn biography() -> String {
    let mut out = String::from(
        "<section id=\"story\" class=\"biography\"><div class=\"section-head\">\
         <h2 class=\"cinzel\">The Matriarch's Journey</h2>\
         <p>Eight chapters that defined a queen, built an empire, and created a legacy that spans generations.</p></div>",
    );
    for (idx, ch) in CHAPTERS.iter().enumerate() {
        let layout = if idx % 2 != 0 { "chapter reverse" } else { "chapter" };
        _ = write!(
            out,
            "<article class=\"{layout}\"><div class=\"chapter-image\">\
             <img src=\"{}\" alt=\"{}\" loading=\"lazy\"/><span class=\"cinzel chapter-number\">{}</span></div>\
             <div class=\"chapter-text\"><span class=\"chapter-period\">{}</span>\
             <h3 class=\"cinzel\">{}</h3><p>{}</p><blockquote class=\"chapter-highlight\">{}</blockquote></div></article>",
            escape_html(ch.image_url),
            escape_html(ch.title),
            idx + 1,
            escape_html(ch.period),
            escape_html(ch.title),
            escape_html(ch.body),
            escape_html(ch.highlight),
        );
    }
    out.push_str("</section>");
    out
}

pub fn legacy() -> String {
    let mut out = format!(
        "<section id=\"legacy\" class=\"legacy\"><div class=\"section-head\">\
         <h2 class=\"cinzel\">A Constellation of Callings</h2><p>{}</p></div><div class=\"pillars\">",
        escape_html(LEGACY_INTRO)
    );
    for p in PILLARS.iter() {
        _ = write!(
            out,
            "<div class=\"pillar\"><h3 class=\"cinzel\">{}. {}: {}</h3>\
             <h4 class=\"cinzel\">{}</h4><p>{}</p></div>",
            p.numeral,
            escape_html(p.role),
            escape_html(p.name),
            escape_html(p.tagline),
            escape_html(p.body),
        );
    }
    out.push_str("</div></section>");
    out
}

pub fn institution() -> String {
    let mut hours = String::new();
    for d in BUSINESS_HOURS.iter() {
        let class = if d.is_closed() { "flamingo" } else { "gold" };
        _ = write!(
            hours,
            "<div class=\"hours-row\"><span>{}</span><span class=\"{class}\">{}</span></div>",
            escape_html(d.day),
            escape_html(d.hours)
        );
    }
    format!(
        "<section id=\"institution\" class=\"institution\"><div class=\"institution-main\">\
         <h2 class=\"cinzel\">New Nyanza: The Institution</h2><p>{intro}</p>\
         <div class=\"facts\"><div class=\"fact\"><h4 class=\"cinzel\">Location</h4><p>{address}</p></div>\
         <div class=\"fact\"><h4 class=\"cinzel\">Entity</h4><p>{entity}</p></div></div>\
         <div class=\"map-frame\"><iframe title=\"{map_title}\" src=\"{map_url}\" width=\"100%\" height=\"100%\" \
         loading=\"lazy\" referrerpolicy=\"no-referrer-when-downgrade\"></iframe></div></div>\
         <div class=\"institution-side\"><div class=\"hours\"><h3 class=\"cinzel\">Business Hours</h3>{hours}\
         <div class=\"hours-footer\"><span class=\"pulse\">At The Helm</span><span class=\"cinzel\">A Legacy in Motion</span></div></div>\
         <blockquote class=\"institution-quote\">{quote}</blockquote></div></section>",
        intro = escape_html(INSTITUTION_INTRO),
        address = escape_html(ADDRESS),
        entity = escape_html(ENTITY),
        map_title = escape_html(MAP_TITLE),
        map_url = escape_html(MAP_EMBED_URL),
        hours = hours,
        quote = escape_html(INSTITUTION_QUOTE),
    )
}

pub fn timeline() -> String {
    let mut out = String::from(
        "<section id=\"timeline\" class=\"timeline\"><h2 class=\"cinzel\">Interactive Journey</h2><div class=\"timeline-track\">",
    );
    for (i, ev) in TIMELINE.iter().enumerate() {
        let side = if i % 2 == 0 { "left" } else { "right" };
        _ = write!(
            out,
            "<div class=\"timeline-event {side}\"><div class=\"timeline-card interactive\">\
             <span class=\"cinzel timeline-year\">{}</span><h3 class=\"cinzel\">{}</h3><p>{}</p></div>\
             <div class=\"timeline-dot\"></div></div>",
            escape_html(ev.year),
            escape_html(ev.title),
            escape_html(ev.description),
        );
    }
    out.push_str("</div></section>");
    out
}

pub fn contact() -> String {
    format!(
        "<section id=\"contact\" class=\"contact\"><div class=\"contact-info\">\
         <h2 class=\"cinzel\">Preserve the Legacy</h2><p>{intro}</p>\
         <p class=\"contact-line\">{address}</p><p class=\"contact-line\">{email}</p></div>\
         <form class=\"contact-form\" novalidate>\
         <input id=\"{ID_CONTACT_NAME}\" type=\"text\" placeholder=\"Name\"/>\
         <input id=\"{ID_CONTACT_EMAIL}\" type=\"email\" placeholder=\"Email\"/>\
         <textarea id=\"{ID_CONTACT_MESSAGE}\" rows=\"5\" placeholder=\"Share your memory or tribute\"></textarea>\
         <button id=\"{ID_CONTACT_SUBMIT}\" type=\"button\" class=\"btn-primary\">Submit Contribution</button>\
         <p id=\"{ID_CONTACT_STATUS}\" class=\"contact-status\" role=\"status\"></p>\
         </form></section>",
        intro = escape_html(CONTACT_INTRO),
        address = escape_html(ADDRESS),
        email = escape_html(ARCHIVE_EMAIL),
    )
}

pub fn footer() -> String {
    format!(
        "<footer class=\"footer\"><img src=\"{}\" alt=\"Logo\" class=\"footer-logo\"/>\
         <span class=\"cinzel gold\">{}</span><p>{}</p></footer>",
        escape_html(LOGO_URL),
        escape_html(TAGLINE),
        escape_html(COPYRIGHT)
    )
}

/// Whole document body in page order.
pub fn page() -> String {
    let mut out = String::new();
    out.push_str(&cursor_layers());
    out.push_str(&progress_bar());
    out.push_str(&navbar());
    out.push_str("<main>");
    for section in [hero(), biography(), legacy(), institution(), timeline(), contact()] {
        out.push_str(&section);
    }
    out.push_str("</main>");
    out.push_str(&footer());
    out
}
