use serde::Serialize;
use word_search_grid::{RenderedPuzzle, Session};

/// The document printed by `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    pub seed: u64,
    pub size: usize,
    pub failed: &'a [String],
    pub puzzle: &'a RenderedPuzzle,
}

impl<'a> JsonOutput<'a> {
    pub fn new(
        title: Option<&'a str>,
        seed: u64,
        session: &'a Session,
        puzzle: &'a RenderedPuzzle,
    ) -> Self {
        Self {
            title,
            seed,
            size: session.settings().size,
            failed: session.result().failed(),
            puzzle,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::Value;
    use word_search_grid::{Settings, WordList};

    use super::*;

    fn session(words: &str, size: usize) -> Session {
        Session::generate(
            Settings {
                size,
                allow_diagonals: false,
            },
            WordList::parse(words, size).unwrap(),
            &mut StdRng::seed_from_u64(8),
        )
    }

    #[test]
    fn json_shape() {
        let session = session("cat dog", 6);
        let puzzle = session.render(true);
        let json = JsonOutput::new(Some("Pets"), 8, &session, &puzzle)
            .to_json()
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Pets");
        assert_eq!(value["seed"], 8);
        assert_eq!(value["size"], 6);
        assert_eq!(value["failed"], Value::Array(vec![]));
        assert_eq!(value["puzzle"]["show_answers"], true);

        let rows = value["puzzle"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.as_array().unwrap().len() == 6));

        let first = &rows[0][0];
        assert_eq!(first["letter"].as_str().unwrap().len(), 1);
        assert!(first["highlighted"].is_boolean());

        let words = value["puzzle"]["words"].as_array().unwrap();
        assert_eq!(words[0]["word"], "CAT");
        assert_eq!(words[1]["word"], "DOG");
        assert_eq!(words[0]["placed"], true);
    }

    #[test]
    fn json_without_title_or_answers() {
        let session = session("cat", 5);
        let puzzle = session.render(false);
        let json = JsonOutput::new(None, 1, &session, &puzzle).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("title").is_none());
        let cells = value["puzzle"]["rows"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|row| row.as_array().unwrap().clone());
        for cell in cells {
            assert!(cell.get("owner").is_none());
            assert_eq!(cell["highlighted"], false);
        }
    }
}
