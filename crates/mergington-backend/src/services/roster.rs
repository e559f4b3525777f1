use std::collections::HashSet;

use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, ActivityListing};
use mergington::errors::{RosterError, SeedError};
use mergington::log;

/// A trait for managing the activity roster and its participants.
///
/// The set of activities is fixed once the roster is built; only the
/// participants of each activity change. Implementations must make each
/// check-then-mutate in [`RosterService::enroll`] and [`RosterService::remove`]
/// atomic with respect to other calls on the same activity.
///
/// # Examples
///
/// ```rust,ignore
/// async fn example_usage<R: RosterService>(roster: &R) -> Result<(), R::Error> {
///     let confirmation = roster.enroll("Chess Club", "emma@mergington.edu").await?;
///     println!("{confirmation}");
///
///     let activities = roster.list().await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RosterService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity with its current participants, in roster order.
    async fn list(&self) -> Result<ActivityListing, Self::Error>;

    /// Retrieves a single activity by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity has the given name.
    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error>;

    /// Signs `email` up for an activity and returns a confirmation message.
    ///
    /// The email is treated as an opaque string.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is
    /// already signed up for it.
    async fn enroll(&self, activity_name: &str, email: &str) -> Result<String, Self::Error>;

    /// Removes `email` from an activity and returns a confirmation message.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is not
    /// signed up for it.
    async fn remove(&self, activity_name: &str, email: &str) -> Result<String, Self::Error>;

    /// Returns the number of activities and the total number of signups.
    async fn stats(&self) -> Result<RosterStats, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    pub activities: usize,
    pub participants: usize,
}

/// An in-memory implementation of the `RosterService` trait.
///
/// Activities live in a `DashMap`, so enroll and remove hold the entry's
/// write guard across the membership check and the update. The listing
/// order is captured once at construction because activities are never
/// added or removed afterwards.
pub struct RosterInMemory {
    order: Vec<String>,
    activities: DashMap<String, Activity>,
}

impl RosterInMemory {
    /// Builds a roster from seed data.
    ///
    /// # Errors
    ///
    /// Rejects duplicate activity names, activities with a capacity of zero
    /// and activities that list the same participant twice.
    pub fn from_seed(seed: ActivityListing) -> Result<Self, SeedError> {
        let activities = DashMap::with_capacity(seed.len());
        let mut order = Vec::with_capacity(seed.len());

        for (name, activity) in seed.0 {
            if activity.max_participants == 0 {
                return Err(SeedError::ZeroCapacity(name));
            }

            let mut seen = HashSet::new();
            if let Some(email) = activity
                .participants
                .iter()
                .find(|email| !seen.insert(email.as_str()))
            {
                return Err(SeedError::DuplicateParticipant {
                    activity: name,
                    email: email.clone(),
                });
            }

            if activities.contains_key(&name) {
                return Err(SeedError::DuplicateActivity(name));
            }
            order.push(name.clone());
            activities.insert(name, activity);
        }

        Ok(Self { order, activities })
    }
}

#[async_trait]
impl RosterService for RosterInMemory {
    type Error = RosterError;

    async fn list(&self) -> Result<ActivityListing, Self::Error> {
        Ok(ActivityListing(
            self.order
                .iter()
                .filter_map(|name| {
                    self.activities
                        .get(name)
                        .map(|entry| (name.clone(), entry.value().clone()))
                })
                .collect(),
        ))
    }

    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))
    }

    async fn enroll(&self, activity_name: &str, email: &str) -> Result<String, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        if !activity.add_participant(email) {
            return Err(RosterError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        log::info!(
            activity = activity_name,
            participants = activity.participants.len(),
            "Signed up {email}"
        );
        Ok(format!("Signed up {email} for {activity_name}"))
    }

    async fn remove(&self, activity_name: &str, email: &str) -> Result<String, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        if !activity.remove_participant(email) {
            return Err(RosterError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        log::info!(
            activity = activity_name,
            participants = activity.participants.len(),
            "Unregistered {email}"
        );
        Ok(format!("Unregistered {email} from {activity_name}"))
    }

    async fn stats(&self) -> Result<RosterStats, Self::Error> {
        let participants = self
            .activities
            .iter()
            .map(|entry| entry.value().participants.len())
            .sum();
        Ok(RosterStats {
            activities: self.activities.len(),
            participants,
        })
    }
}
