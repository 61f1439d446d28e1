pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

pub fn validate_title(title: &str) -> Result<(), String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Gym title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(format!(
            "Gym title cannot exceed {MAX_TITLE_LEN} characters"
        ));
    }
    Ok(())
}

pub fn validate_description(description: &Option<String>) -> Result<(), String> {
    if let Some(d) = description {
        if d.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(format!(
                "Description cannot exceed {MAX_DESCRIPTION_LEN} characters"
            ));
        }
    }
    Ok(())
}
