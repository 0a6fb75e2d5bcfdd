//! Read-only notifications shown in the header panel and the
//! notifications page.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Tutor,
    Student,
    Admin,
    Group,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UserRole::Tutor => "Tutor",
            UserRole::Student => "Student",
            UserRole::Admin => "Admin",
            UserRole::Group => "Group",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub sender_name: String,
    pub sender_role: UserRole,
    /// Course code or user id of the sender, shown next to the timestamp.
    pub sender_id: String,
    pub receiver_name: String,
    pub receiver_role: UserRole,
    pub message: String,
    /// Relative display string such as `"5 minutes ago"`. Not sortable.
    pub timestamp: String,
    pub course_code: String,
    pub is_read: bool,
}

impl Notification {
    /// `"Michael Jones (Tutor) messaged to Alice Smith (Student)"`.
    pub fn headline(&self) -> String {
        format!(
            "{} ({}) messaged to {} ({})",
            self.sender_name, self.sender_role, self.receiver_name, self.receiver_role
        )
    }
}

/// Splits notifications into (unread, read), keeping their order.
pub fn partition_unread(
    notifications: &[Notification],
) -> (Vec<&Notification>, Vec<&Notification>) {
    notifications.iter().partition(|n| !n.is_read)
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Avatar initials: first and last initial for multi-word names, else the
/// first two letters. Always uppercase.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

/// Deterministic palette slot for a name, so a sender keeps the same
/// avatar colour across renders.
pub fn avatar_slot(name: &str, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    let hash = name.encode_utf16().fold(0i32, |acc, unit| {
        (unit as i32).wrapping_add(acc.wrapping_shl(5).wrapping_sub(acc))
    });
    (hash % palette_len as i32).unsigned_abs() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn initials_cover_single_and_multi_word_names() {
        assert_eq!(initials("Michael Jones"), "MJ");
        assert_eq!(initials("Queen Mary Hippolyta"), "QH");
        assert_eq!(initials("admin"), "AD");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn avatar_slot_is_stable_and_in_range() {
        for name in ["Michael Jones", "Bob Johnson", "System Admin", ""] {
            let slot = avatar_slot(name, 8);
            assert!(slot < 8);
            assert_eq!(slot, avatar_slot(name, 8));
        }
        assert_eq!(avatar_slot("anything", 0), 0);
    }

    #[test]
    fn avatar_slot_matches_string_hash() {
        // "ab": h = 97, then 98 + (97 << 5) - 97 = 3105
        assert_eq!(avatar_slot("ab", 8), 3105 % 8);
    }

    #[test]
    fn seed_splits_three_and_three() {
        let notifications = seed::notifications();
        let (unread, read) = partition_unread(&notifications);
        assert_eq!(unread.len(), 3);
        assert_eq!(read.len(), 3);
        assert_eq!(unread_count(&notifications), 3);
        assert_eq!(
            unread[0].headline(),
            "Michael Jones (Tutor) messaged to Alice Smith (Student)"
        );
    }
}
