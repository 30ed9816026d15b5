use serde::{Deserialize, Serialize};

// the configuration object handed to the diagram library before rendering
//
// field names follow the library's own camelCase spelling, since this is serialized as-is
// into its initialize() call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramStyle {
    pub theme: String,
    pub theme_variables: ThemeVariables,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariables {
    pub font_size: String,
    pub font_family: String,
    pub primary_color: String,
    pub primary_text_color: String,
    pub line_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::PreferenceSet;

    #[test]
    fn serializes_with_library_field_names() {
        let style = PreferenceSet::default().diagram_style("22px", "Segoe UI, sans-serif");
        let json = serde_json::to_value(&style).unwrap();

        assert_eq!(json["theme"], "default");
        assert_eq!(json["themeVariables"]["fontSize"], "22px");
        assert_eq!(json["themeVariables"]["fontFamily"], "Segoe UI, sans-serif");
        assert!(json["themeVariables"]["primaryTextColor"].is_string());
        assert!(json["themeVariables"]["lineColor"].is_string());
    }
}
