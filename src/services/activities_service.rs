use thiserror::Error;
use tracing::info;

use crate::database::activity_store::ActivityStore;
use crate::models::ActivityDirectory;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Participant not found")]
    ParticipantNotFound { activity: String, email: String },
}

pub async fn list_activities(store: &ActivityStore) -> ActivityDirectory {
    store.snapshot().await
}

/// Adds `email` to the roster of `activity` and returns the confirmation text.
pub async fn signup(
    store: &ActivityStore,
    activity: &str,
    email: &str,
) -> Result<String, ActivityError> {
    store
        .with_activity_mut(activity, |record| record.add_participant(email))
        .await
        .ok_or_else(|| ActivityError::ActivityNotFound {
            activity: activity.to_string(),
        })?;

    info!(activity = %activity, email = %email, "participant signed up");
    Ok(format!("Signed up {} for {}", email, activity))
}

pub async fn unregister(
    store: &ActivityStore,
    activity: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let removed = store
        .with_activity_mut(activity, |record| record.remove_participant(email))
        .await
        .ok_or_else(|| ActivityError::ActivityNotFound {
            activity: activity.to_string(),
        })?;

    if !removed {
        return Err(ActivityError::ParticipantNotFound {
            activity: activity.to_string(),
            email: email.to_string(),
        });
    }

    info!(activity = %activity, email = %email, "participant removed");
    Ok(format!("Removed {} from {}", email, activity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;

    fn store() -> ActivityStore {
        ActivityStore::new(seed::default_directory())
    }

    async fn participants(store: &ActivityStore, activity: &str) -> Vec<String> {
        list_activities(store)
            .await
            .get(activity)
            .unwrap()
            .participants
            .clone()
    }

    #[tokio::test]
    async fn unknown_activity_fails_both_operations() {
        let store = store();
        for name in ["NonExistent Club", "chess club", "Chess Club ", ""] {
            assert!(matches!(
                signup(&store, name, "a@x.edu").await,
                Err(ActivityError::ActivityNotFound { .. })
            ));
            assert!(matches!(
                unregister(&store, name, "a@x.edu").await,
                Err(ActivityError::ActivityNotFound { .. })
            ));
        }
        assert_eq!(list_activities(&store).await, seed::default_directory());
    }

    #[tokio::test]
    async fn not_found_errors_carry_the_request() {
        let store = store();
        assert_eq!(
            signup(&store, "Fake Club", "a@x.edu").await,
            Err(ActivityError::ActivityNotFound {
                activity: "Fake Club".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn signup_appends_and_confirms() {
        let store = store();
        let msg = signup(&store, "Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();
        assert!(msg.contains("newstudent@mergington.edu"));
        assert!(msg.contains("Chess Club"));

        let roster = participants(&store, "Chess Club").await;
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.last().unwrap(), "newstudent@mergington.edu");
    }

    #[tokio::test]
    async fn double_signup_appends_twice() {
        let store = store();
        signup(&store, "Debate Team", "twice@x.edu").await.unwrap();
        signup(&store, "Debate Team", "twice@x.edu").await.unwrap();

        let roster = participants(&store, "Debate Team").await;
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.iter().filter(|p| *p == "twice@x.edu").count(), 2);
    }

    #[tokio::test]
    async fn signup_ignores_capacity() {
        let store = store();
        for i in 0..12 {
            signup(&store, "Chess Club", &format!("s{}@x.edu", i))
                .await
                .unwrap();
        }
        let record = list_activities(&store).await;
        let chess = record.get("Chess Club").unwrap();
        assert!(chess.participants.len() > chess.max_participants as usize);
    }

    #[tokio::test]
    async fn signup_then_unregister_restores_roster() {
        let store = store();
        let before = participants(&store, "Science Club").await;

        signup(&store, "Science Club", "temp@x.edu").await.unwrap();
        let msg = unregister(&store, "Science Club", "temp@x.edu")
            .await
            .unwrap();
        assert!(msg.starts_with("Removed temp@x.edu"));

        assert_eq!(participants(&store, "Science Club").await, before);
    }

    #[tokio::test]
    async fn unregister_absent_participant() {
        let store = store();
        let err = unregister(&store, "Art Club", "doesnotexist@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Participant not found");
        assert_eq!(
            err,
            ActivityError::ParticipantNotFound {
                activity: "Art Club".to_string(),
                email: "doesnotexist@mergington.edu".to_string(),
            }
        );
        assert_eq!(participants(&store, "Art Club").await.len(), 2);
    }

    #[tokio::test]
    async fn unregister_seeded_participant_preserves_order() {
        let store = store();
        signup(&store, "Soccer Team", "ella@x.edu").await.unwrap();
        unregister(&store, "Soccer Team", "liam@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            participants(&store, "Soccer Team").await,
            vec!["noah@mergington.edu", "ella@x.edu"]
        );
    }

    #[test]
    fn error_messages_match_wire_detail() {
        let activity = ActivityError::ActivityNotFound {
            activity: "X".into(),
        };
        assert_eq!(activity.to_string(), "Activity not found");
    }
}
