pub mod config;
pub mod document;
pub mod port;
pub mod store;
pub mod view;

// id validation
//
// page, section and submenu ids double as html ids and css selectors (the diagram renderer
// looks nodes up by "#<page> .mermaid"), so we keep them to the boring subset
pub const NODE_ID_REGEX: &str = r"^[a-zA-Z][a-zA-Z0-9_-]{0,63}$";
