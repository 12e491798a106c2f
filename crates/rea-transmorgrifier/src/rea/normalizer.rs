/// Collapses every whitespace run (spaces, tabs, CR, LF) to one space and trims.
pub fn remove_extra_spaces(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-cased, whitespace-collapsed form used for vocabulary lookups.
pub(crate) fn normalize_token(value: &str) -> String {
    remove_extra_spaces(value).to_ascii_lowercase()
}

/// Expands an Australian state abbreviation to its long name. Unknown text is kept as-is.
pub(crate) fn expand_state(value: &str) -> String {
    let long = match normalize_token(value).replace('.', "").as_str() {
        "vic" | "victoria" => "Victoria",
        "nsw" | "new south wales" => "New South Wales",
        "qld" | "queensland" => "Queensland",
        "sa" | "south australia" => "South Australia",
        "wa" | "western australia" => "Western Australia",
        "tas" | "tasmania" => "Tasmania",
        "nt" | "northern territory" => "Northern Territory",
        "act" | "australian capital territory" => "Australian Capital Territory",
        _ => return remove_extra_spaces(value),
    };
    long.to_string()
}

/// ISO 3166 alpha-2 code for the listing country; the feed is Australian by default.
pub(crate) fn country_iso_code(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "AU".to_string();
    };

    match normalize_token(value).as_str() {
        "" | "au" | "aus" | "australia" => "AU".to_string(),
        "nz" | "nzl" | "new zealand" => "NZ".to_string(),
        _ => remove_extra_spaces(value).to_ascii_uppercase(),
    }
}
