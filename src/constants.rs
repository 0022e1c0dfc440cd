// Host page contract and DOM event names used by the web frontend.

// Host page element that receives the rendered markup
pub const APP_ROOT_ID: &str = "app-root";

// Window events
pub const EVENT_MOUSEMOVE: &str = "mousemove";
pub const EVENT_MOUSEOVER: &str = "mouseover";
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_SCROLL: &str = "scroll";

// Contact status classes
pub const STATUS_OK_CLASS: &str = "status-ok";
pub const STATUS_ERROR_CLASS: &str = "status-error";

// Mobile menu button labels
pub const MENU_LABEL_OPEN: &str = "Close";
pub const MENU_LABEL_CLOSED: &str = "Menu";
