//! Content negotiation between JSON and the `<option>` fragment format.
//!
//! The frontend populates `<select>` elements by requesting a collection with
//! `Accept: text/html`, which yields one `<option value="{id}">{label}</option>`
//! per record and nothing else (no JSON wrapper, no surrounding markup). Any
//! other Accept value, or none, yields a JSON array. Single-record lookups
//! always return JSON.
//!
//! The Accept match is an exact string compare against `text/html` - no media
//! type parsing, no quality values. That mirrors what the frontend actually
//! sends and what the service has always honored.

use axum::{
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;
use std::fmt::Write;

use crate::db::models::{Lab, Project, Task, User};

/// A record that can appear in a select-option list.
pub trait OptionItem {
    fn value(&self) -> i32;
    fn label(&self) -> String;
}

impl OptionItem for Lab {
    fn value(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl OptionItem for Project {
    fn value(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl OptionItem for Task {
    fn value(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl OptionItem for User {
    fn value(&self) -> i32 {
        self.id
    }

    /// `firstName lastName`, with the last name omitted entirely when absent.
    fn label(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// True when the request asked for the HTML fragment format.
pub fn wants_html(headers: &HeaderMap) -> bool {
    headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) == Some("text/html")
}

/// Respond with either a JSON array or an `<option>` fragment, depending on
/// the Accept header.
pub fn negotiate<T>(headers: &HeaderMap, items: Vec<T>) -> Response
where
    T: Serialize + OptionItem,
{
    if wants_html(headers) {
        Html(render_options(&items)).into_response()
    } else {
        Json(items).into_response()
    }
}

/// Render a collection as a bare run of `<option>` elements.
pub fn render_options<T: OptionItem>(items: &[T]) -> String {
    let mut out = String::new();
    for item in items {
        // write! to a String cannot fail
        let _ = write!(
            out,
            r#"<option value="{}">{}</option>"#,
            item.value(),
            escape(&item.label())
        );
    }
    out
}

/// Minimal HTML escaping for text and attribute positions. The fragment
/// format is trivial enough that a templating engine would be overkill.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn lab(id: i32, name: &str) -> Lab {
        Lab {
            id,
            name: name.to_string(),
        }
    }

    fn user(first: &str, last: Option<&str>) -> User {
        User {
            id: 1,
            lab_id: 1,
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
            badge: None,
            pin: None,
            full_legal_name: None,
            contact_id: None,
            primary_contact_id: None,
            secondary_contact_id: None,
            third_contact_id: None,
            tour_role_id: None,
            lab_role_id: None,
            is_active: true,
        }
    }

    #[test]
    fn test_accept_header_must_match_exactly() {
        let mut headers = HeaderMap::new();
        assert!(!wants_html(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        assert!(wants_html(&headers));

        // Parameterized or compound Accept values fall through to JSON
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html; charset=utf-8"));
        assert!(!wants_html(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert!(!wants_html(&headers));
    }

    #[test]
    fn test_one_option_per_record() {
        let labs = vec![lab(1, "Assembly"), lab(2, "Machining")];
        assert_eq!(
            render_options(&labs),
            r#"<option value="1">Assembly</option><option value="2">Machining</option>"#
        );
    }

    #[test]
    fn test_empty_collection_renders_nothing() {
        assert_eq!(render_options(&Vec::<Lab>::new()), "");
    }

    #[test]
    fn test_labels_are_escaped() {
        let labs = vec![lab(1, r#"R&D <"west" wing>"#)];
        assert_eq!(
            render_options(&labs),
            r#"<option value="1">R&amp;D &lt;&quot;west&quot; wing&gt;</option>"#
        );
    }

    #[test]
    fn test_user_label_omits_absent_last_name() {
        assert_eq!(user("Ada", Some("Lovelace")).label(), "Ada Lovelace");
        assert_eq!(user("Ada", None).label(), "Ada");
    }
}
