// SPDX-License-Identifier: MPL-2.0
//! Vita timeline parsing.
//!
//! The vita is authored as plain text:
//!
//! ```text
//! 2024
//! Exhibition title
//! Venue, City
//!
//! Contact: someone@example.com
//! ```
//!
//! A four-digit line opens a year; the following lines pair up as
//! title/detail. A `contact:` line (any case) sets the contact address.
//! Lines before the first year are ignored.

/// One title/detail pair of a vita year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitaItem {
    pub title: String,
    pub detail: String,
}

/// All entries listed under a year heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitaYear {
    pub year: String,
    pub items: Vec<VitaItem>,
}

/// Parsed vita.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vita {
    pub years: Vec<VitaYear>,
    pub contact: Option<String>,
}

impl Vita {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.contact.is_none()
    }
}

const CONTACT_PREFIX: &str = "contact:";

fn is_year(line: &str) -> bool {
    line.len() == 4 && line.bytes().all(|b| b.is_ascii_digit())
}

fn contact_value(line: &str) -> Option<&str> {
    let prefix = line.get(..CONTACT_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(CONTACT_PREFIX)
        .then(|| line[CONTACT_PREFIX.len()..].trim())
}

/// Parses vita text. Never fails; malformed input yields fewer entries.
#[must_use]
pub fn parse_vita(text: &str) -> Vita {
    let mut vita = Vita::default();
    let mut current: Option<VitaYear> = None;
    let mut pending_title: Option<String> = None;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(contact) = contact_value(line) {
            if !contact.is_empty() {
                vita.contact = Some(contact.to_string());
            }
            continue;
        }

        if is_year(line) {
            if let Some(year) = current.take().filter(|year| !year.items.is_empty()) {
                vita.years.push(year);
            }
            current = Some(VitaYear {
                year: line.to_string(),
                items: Vec::new(),
            });
            pending_title = None;
            continue;
        }

        let Some(year) = current.as_mut() else {
            continue;
        };

        match pending_title.take() {
            None => pending_title = Some(line.to_string()),
            Some(title) => year.items.push(VitaItem {
                title,
                detail: line.to_string(),
            }),
        }
    }

    if let Some(mut year) = current {
        if let Some(title) = pending_title {
            year.items.push(VitaItem {
                title,
                detail: String::new(),
            });
        }
        if !year.items.is_empty() {
            vita.years.push(year);
        }
    }

    vita
}
