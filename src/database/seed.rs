use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{ActivityDirectory, ActivityRecord};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid seed data: {message}")]
    Invalid { message: String },
}

/// The activities Mergington High School starts every term with.
pub fn default_directory() -> ActivityDirectory {
    let mut dir = ActivityDirectory::new();
    dir.insert(
        "Chess Club",
        ActivityRecord::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    dir.insert(
        "Programming Class",
        ActivityRecord::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    dir.insert(
        "Gym Class",
        ActivityRecord::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    dir.insert(
        "Soccer Team",
        ActivityRecord::new(
            "Competitive soccer team practices and matches",
            "Mondays, Wednesdays, Fridays, 4:00 PM - 6:00 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
    );
    dir.insert(
        "Basketball Club",
        ActivityRecord::new(
            "Pickup games, drills, and intramural tournaments",
            "Tuesdays and Thursdays, 5:00 PM - 7:00 PM",
            15,
            &["alex@mergington.edu", "mason@mergington.edu"],
        ),
    );
    dir.insert(
        "Art Club",
        ActivityRecord::new(
            "Explore drawing, painting, and mixed media projects",
            "Wednesdays, 3:30 PM - 5:00 PM",
            20,
            &["ava@mergington.edu", "isabella@mergington.edu"],
        ),
    );
    dir.insert(
        "Drama Club",
        ActivityRecord::new(
            "Theater production, acting workshops, and stagecraft",
            "Thursdays, 4:00 PM - 6:00 PM",
            25,
            &["mia@mergington.edu", "charlotte@mergington.edu"],
        ),
    );
    dir.insert(
        "Debate Team",
        ActivityRecord::new(
            "Competitive debating, public speaking, and argumentation skills",
            "Mondays and Thursdays, 3:30 PM - 5:00 PM",
            18,
            &["logan@mergington.edu", "lucas@mergington.edu"],
        ),
    );
    dir.insert(
        "Science Club",
        ActivityRecord::new(
            "Hands-on experiments, guest lectures, and science fairs",
            "Fridays, 3:30 PM - 5:00 PM",
            20,
            &["amelia@mergington.edu", "elijah@mergington.edu"],
        ),
    );
    dir
}

/// Reads a JSON seed file shaped like the `GET /activities` response.
pub fn load_directory(path: impl AsRef<Path>) -> Result<ActivityDirectory, SeedError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dir: ActivityDirectory =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_directory(&dir)?;
    Ok(dir)
}

pub fn validate_directory(dir: &ActivityDirectory) -> Result<(), SeedError> {
    if dir.is_empty() {
        return Err(invalid("no activities defined"));
    }

    for (name, record) in dir.iter() {
        if name.trim().is_empty() {
            return Err(invalid("activity name must not be empty"));
        }
        if record.max_participants == 0 {
            return Err(invalid(format!(
                "`{}`: max_participants must be positive",
                name
            )));
        }
        let mut seen = HashSet::new();
        for email in &record.participants {
            if !seen.insert(email.as_str()) {
                return Err(invalid(format!(
                    "`{}`: participant {} listed twice",
                    name, email
                )));
            }
        }
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> SeedError {
    SeedError::Invalid {
        message: message.into(),
    }
}
