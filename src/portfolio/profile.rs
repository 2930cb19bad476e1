use crate::model::PersonalInfo;

const FALLBACK_NAME: &str = "a developer";
const FALLBACK_TITLE: &str = "Software Developer";

/// What the hero greets visitors with. Blank or missing personal info still
/// yields a usable greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub name: String,
    pub title: String,
}

impl Headline {
    pub fn from_info(info: Option<&PersonalInfo>) -> Self {
        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            name: info
                .and_then(|i| non_blank(&i.full_name))
                .unwrap_or_else(|| FALLBACK_NAME.to_string()),
            title: info
                .and_then(|i| non_blank(&i.title))
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn info(name: &str, title: &str) -> PersonalInfo {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "fullName": name,
            "title": title,
            "email": "ada@example.com",
        }))
        .unwrap()
    }

    #[test]
    fn test_headline_from_info() {
        assert_eq!(
            Headline::from_info(Some(&info("Ada Lovelace", "Engineer"))),
            Headline {
                name: "Ada Lovelace".to_string(),
                title: "Engineer".to_string(),
            }
        );
    }

    #[test]
    fn test_headline_without_info() {
        let fallback = Headline::from_info(None);
        assert_eq!(fallback.name, FALLBACK_NAME);
        assert_eq!(fallback.title, FALLBACK_TITLE);
        assert_eq!(Headline::from_info(Some(&info("  ", ""))), fallback);
    }
}
