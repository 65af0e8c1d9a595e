//! Frontend Models
//!
//! Table plan data structures and the status display vocabulary.

use serde::{Deserialize, Serialize};

/// Seating state of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

impl TableStatus {
    /// Display order for legend and filter chips
    pub const ALL: [TableStatus; 3] = [
        TableStatus::Available,
        TableStatus::Occupied,
        TableStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "occupied" => TableStatus::Occupied,
            "reserved" => TableStatus::Reserved,
            _ => TableStatus::Available,
        }
    }

    /// Marker color for cards, dots and the legend
    pub fn color(&self) -> &'static str {
        match self {
            TableStatus::Available => "#F44336",
            TableStatus::Occupied => "#4CAF50",
            TableStatus::Reserved => "#FFC107",
        }
    }

    /// Emoji shown on the table card
    pub fn icon(&self) -> &'static str {
        match self {
            TableStatus::Available => "🍽️",
            TableStatus::Occupied => "👨‍🍳",
            TableStatus::Reserved => "⏱️",
        }
    }
}

/// One table on the floor plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: u32,
    pub name: String,
    pub status: TableStatus,
}

/// Status wording shown to staff
///
/// Two drafts of the table screen shipped with different wording; both
/// stay available and one is active at a time. `Service` is the richer
/// wording and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusVocabulary {
    /// "Trống" / "Đang phục vụ" / "Đã đặt"
    #[default]
    Service,
    /// "Bàn trống" / "Có khách" / "Đặt trước"
    Occupancy,
}

impl StatusVocabulary {
    pub fn label(&self, status: TableStatus) -> &'static str {
        match self {
            StatusVocabulary::Service => match status {
                TableStatus::Available => "Trống",
                TableStatus::Occupied => "Đang phục vụ",
                TableStatus::Reserved => "Đã đặt",
            },
            StatusVocabulary::Occupancy => match status {
                TableStatus::Available => "Bàn trống",
                TableStatus::Occupied => "Có khách",
                TableStatus::Reserved => "Đặt trước",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_str_round_trip() {
        for status in TableStatus::ALL {
            assert_eq!(TableStatus::from_str(status.as_str()), status);
        }
        // Unknown strings fall back to available
        assert_eq!(TableStatus::from_str("???"), TableStatus::Available);
    }

    #[test]
    fn test_status_markers_are_distinct() {
        let colors: Vec<&str> = TableStatus::ALL.iter().map(|s| s.color()).collect();
        assert_eq!(colors, vec!["#F44336", "#4CAF50", "#FFC107"]);

        let icons: Vec<&str> = TableStatus::ALL.iter().map(|s| s.icon()).collect();
        assert_eq!(icons.len(), 3);
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
    }

    #[test]
    fn test_vocabulary_labels() {
        assert_eq!(
            StatusVocabulary::Service.label(TableStatus::Occupied),
            "Đang phục vụ"
        );
        assert_eq!(
            StatusVocabulary::Occupancy.label(TableStatus::Occupied),
            "Có khách"
        );
        // Default wording is the service draft
        assert_eq!(
            StatusVocabulary::default().label(TableStatus::Available),
            "Trống"
        );
    }
}
