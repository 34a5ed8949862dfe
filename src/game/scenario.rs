use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::game::decision::{Decision, OPTIONS_PER_DECISION};

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scenario has no decisions")]
    NoDecisions,
    #[error("decision {index} (\"{prompt}\") has {count} options, expected 2")]
    OptionCount {
        index: usize,
        prompt: String,
        count: usize,
    },
}

/// The full content of one game: a title and its ordered decisions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub decisions: Vec<Decision>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        if self.decisions.is_empty() {
            return Err(ScenarioError::NoDecisions);
        }
        for (index, decision) in self.decisions.iter().enumerate() {
            if decision.options.len() != OPTIONS_PER_DECISION {
                return Err(ScenarioError::OptionCount {
                    index,
                    prompt: decision.prompt.clone(),
                    count: decision.options.len(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Lost puppy scenario
// ---------------------------------------------------------------------------

pub fn lost_puppy_scenario() -> Scenario {
    let decisions = vec![
        Decision::new("You see a lost puppy. What do you do?", "Pet it", "Yell at it"),
        Decision::new(
            "Do you give the puppy a treat?",
            "Give it a treat",
            "Let it starve",
        ),
        Decision::new(
            "Do you give it water?",
            "Give water",
            "Give a mysterious beverage",
        ),
        Decision::new("Do you take it on a walk?", "Take it on a walk", "Ignore it"),
        Decision::new(
            "Teach it tricks?",
            "Teach it fetch",
            "No, it's to much of a hassle",
        ),
    ];

    Scenario {
        title: "Lost Puppy Adventure".into(),
        decisions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_puppy_is_valid() {
        let scenario = lost_puppy_scenario();
        assert_eq!(scenario.decisions.len(), 5);
        assert!(scenario.validate().is_ok());
        for decision in &scenario.decisions {
            assert!(decision.options[0].is_good);
            assert!(!decision.options[1].is_good);
        }
    }

    #[test]
    fn test_from_json() {
        let raw = r#"{
            "title": "Kitten",
            "decisions": [
                {"prompt": "Feed it?", "options": [
                    {"label": "Yes", "is_good": true},
                    {"label": "No", "is_good": false}
                ]}
            ]
        }"#;
        let scenario = Scenario::from_json(raw).unwrap();
        assert_eq!(scenario.title, "Kitten");
        assert_eq!(scenario.decisions[0], Decision::new("Feed it?", "Yes", "No"));
    }

    #[test]
    fn test_from_json_rejects_wrong_option_count() {
        let raw = r#"{"title": "t", "decisions": [
            {"prompt": "Only one?", "options": [{"label": "Yes", "is_good": true}]}
        ]}"#;
        let err = Scenario::from_json(raw).unwrap_err();
        assert!(matches!(err, ScenarioError::OptionCount { index: 0, count: 1, .. }));
    }

    #[test]
    fn test_from_json_rejects_empty() {
        let err = Scenario::from_json(r#"{"title": "t", "decisions": []}"#).unwrap_err();
        assert!(matches!(err, ScenarioError::NoDecisions));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Scenario::from_json("not json").unwrap_err();
        assert!(matches!(err, ScenarioError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scenario::load("/nonexistent/scenario.json").unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
    }

    #[test]
    fn test_bundled_kitten_scenario() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/lost_kitten.json");
        let scenario = Scenario::load(path).unwrap();
        assert_eq!(scenario.title, "Lost Kitten Adventure");
        assert_eq!(scenario.decisions.len(), 4);
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("lost-puppy-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"title": "Disk", "decisions": [{"prompt": "Q", "options": [
                {"label": "a", "is_good": false}, {"label": "b", "is_good": true}]}]}"#,
        )
        .unwrap();
        let scenario = Scenario::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(scenario.title, "Disk");
        assert!(scenario.decisions[0].options[1].is_good);
    }
}
