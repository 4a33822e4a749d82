/// Display name for a collecting agent, "prenom nom", tolerating either
/// half being absent in denormalized rows.
pub fn format_collecteur_name(prenom: &Option<String>, nom: &Option<String>) -> String {
    match (prenom.as_deref(), nom.as_deref()) {
        (Some(p), Some(n)) => format!("{p} {n}"),
        (Some(p), None) => p.to_string(),
        (None, Some(n)) => n.to_string(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_both_halves() {
        assert_eq!(
            format_collecteur_name(&Some("Jean".into()), &Some("Abena".into())),
            "Jean Abena"
        );
    }

    #[test]
    fn tolerates_missing_half() {
        assert_eq!(format_collecteur_name(&None, &Some("Abena".into())), "Abena");
        assert_eq!(format_collecteur_name(&Some("Jean".into()), &None), "Jean");
        assert_eq!(format_collecteur_name(&None, &None), "");
    }
}
