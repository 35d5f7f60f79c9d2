/// Display names for the streaming services the assistant knows about
///
/// Keys are the lower-case service ids used by the availability API. An
/// unrecognized id degrades to a capitalized form of the raw key, so a new
/// upstream service shows up with a usable label instead of an error.
pub fn display_name(service_id: &str) -> String {
    match service_id.to_lowercase().as_str() {
        "netflix" => "Netflix".to_string(),
        "prime" => "Amazon Prime Video".to_string(),
        "disney" => "Disney+".to_string(),
        "hulu" => "Hulu".to_string(),
        "espnplus" => "ESPN+".to_string(),
        "max" => "Max".to_string(),
        "paramountplus" => "Paramount+".to_string(),
        "youtube" => "YouTube Premium".to_string(),
        "apple" => "Apple TV+".to_string(),
        other => capitalize(other),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
