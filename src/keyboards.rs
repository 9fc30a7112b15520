use chrono::NaiveDate;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub const BOOKING_WINDOW_DAYS: i64 = 8;
pub const TIME_SLOTS: [&str; 4] = ["09:00", "12:00", "15:00", "18:00"];
pub const LOCATIONS: [&str; 2] = ["Location 1", "Location 2"];

/// The next `BOOKING_WINDOW_DAYS` calendar dates starting from `today`,
/// formatted as human-readable labels.
pub fn upcoming_dates(today: NaiveDate) -> Vec<String> {
    (0..BOOKING_WINDOW_DAYS)
        .map(|offset| {
            (today + chrono::Duration::days(offset))
                .format("%d %B %Y")
                .to_string()
        })
        .collect()
}

fn paired(labels: impl IntoIterator<Item = String>) -> InlineKeyboardMarkup {
    let buttons = labels
        .into_iter()
        .map(|label| InlineKeyboardButton::callback(label.clone(), label))
        .collect::<Vec<_>>();
    let keyboard = buttons
        .chunks(2)
        .map(|row| row.to_vec())
        .collect::<Vec<_>>();

    InlineKeyboardMarkup::new(keyboard)
}

pub fn date_keyboard(today: NaiveDate) -> InlineKeyboardMarkup {
    paired(upcoming_dates(today))
}

pub fn time_keyboard() -> InlineKeyboardMarkup {
    paired(TIME_SLOTS.iter().map(|slot| slot.to_string()))
}

pub fn location_keyboard() -> InlineKeyboardMarkup {
    paired(LOCATIONS.iter().map(|location| location.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn button_labels(markup: &InlineKeyboardMarkup) -> Vec<Vec<String>> {
        markup
            .inline_keyboard
            .iter()
            .map(|row| row.iter().map(|button| button.text.clone()).collect())
            .collect()
    }

    #[test]
    fn window_covers_the_next_eight_days_in_order() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
        assert_eq!(
            upcoming_dates(today),
            vec![
                "26 February 2024",
                "27 February 2024",
                "28 February 2024",
                "29 February 2024",
                "01 March 2024",
                "02 March 2024",
                "03 March 2024",
                "04 March 2024",
            ]
        );
    }

    #[test]
    fn date_keyboard_pairs_labels_two_per_row() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let markup = date_keyboard(today);

        assert_eq!(markup.inline_keyboard.len(), 4);
        for row in &markup.inline_keyboard {
            assert_eq!(row.len(), 2);
        }
        assert_eq!(
            button_labels(&markup),
            vec![
                vec!["10 March 2024", "11 March 2024"],
                vec!["12 March 2024", "13 March 2024"],
                vec!["14 March 2024", "15 March 2024"],
                vec!["16 March 2024", "17 March 2024"],
            ]
        );
    }

    #[test]
    fn keyboard_payload_matches_the_label() {
        let markup = time_keyboard();
        for row in &markup.inline_keyboard {
            for button in row {
                match &button.kind {
                    InlineKeyboardButtonKind::CallbackData(data) => {
                        assert_eq!(data, &button.text)
                    }
                    other => panic!("unexpected button kind: {:?}", other),
                }
            }
        }
    }

    #[test]
    fn time_keyboard_offers_the_four_fixed_slots() {
        assert_eq!(
            button_labels(&time_keyboard()),
            vec![vec!["09:00", "12:00"], vec!["15:00", "18:00"]]
        );
    }

    #[test]
    fn location_keyboard_offers_the_two_locations() {
        assert_eq!(
            button_labels(&location_keyboard()),
            vec![vec!["Location 1", "Location 2"]]
        );
    }
}
