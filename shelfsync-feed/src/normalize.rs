//! Feed item normalization.
//!
//! Flattens one [`FeedItem`] into a [`Record`]. Absent or empty feed values
//! produce an absent field; values are trimmed because Goodreads pads some
//! CDATA sections with whitespace.

use shelfsync_core::Record;

use crate::parse::FeedItem;

/// Map one feed item into a flat record.
pub fn normalize(item: &FeedItem) -> Record {
    let mut record = Record::new();
    set_opt(&mut record, "title", &item.title);
    set_opt(&mut record, "url", &item.link);
    set_opt(&mut record, "author", &item.author_name);
    set_opt(&mut record, "published_year", &item.book_published);
    set_opt(&mut record, "average_rating", &item.average_rating);
    set_opt(&mut record, "user_rating", &item.user_rating);
    set_opt(&mut record, "pub_date", &item.pub_date);
    set_opt(&mut record, "user_read_at", &item.user_read_at);
    set_opt(&mut record, "user_date_added", &item.user_date_added);
    set_opt(&mut record, "user_date_created", &item.user_date_created);
    record
}

fn set_opt(record: &mut Record, field: &str, value: &Option<String>) {
    if let Some(value) = value {
        record.set(field, value.trim());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_feed_field_to_its_record_name() {
        let item = FeedItem {
            title: Some("Dune".into()),
            link: Some("https://example.com/dune".into()),
            author_name: Some("Frank Herbert".into()),
            book_published: Some("1965".into()),
            average_rating: Some("4.27".into()),
            user_rating: Some("5".into()),
            pub_date: Some("Mon, 25 May 2020 11:00:13 -0700".into()),
            user_read_at: Some("Wed, 27 May 2020 00:00:00 -0700".into()),
            user_date_added: Some("Mon, 25 May 2020 11:00:13 -0700".into()),
            user_date_created: Some("Mon, 25 May 2020 11:00:13 -0700".into()),
        };

        let record = normalize(&item);
        assert_eq!(record.get("title"), Some("Dune"));
        assert_eq!(record.get("url"), Some("https://example.com/dune"));
        assert_eq!(record.get("author"), Some("Frank Herbert"));
        assert_eq!(record.get("published_year"), Some("1965"));
        assert_eq!(record.get("average_rating"), Some("4.27"));
        assert_eq!(record.get("user_rating"), Some("5"));
        assert_eq!(
            record.get("pub_date"),
            Some("Mon, 25 May 2020 11:00:13 -0700")
        );
        assert_eq!(
            record.get("user_read_at"),
            Some("Wed, 27 May 2020 00:00:00 -0700")
        );
        assert_eq!(
            record.get("user_date_added"),
            Some("Mon, 25 May 2020 11:00:13 -0700")
        );
        assert_eq!(
            record.get("user_date_created"),
            Some("Mon, 25 May 2020 11:00:13 -0700")
        );
    }

    #[test]
    fn absent_and_empty_values_produce_absent_fields() {
        let item = FeedItem {
            title: Some("  Piranesi  ".into()),
            user_rating: Some("".into()),
            user_read_at: Some("   ".into()),
            ..FeedItem::default()
        };

        let record = normalize(&item);
        assert_eq!(record.get("title"), Some("Piranesi"));
        assert_eq!(record.get("user_rating"), None);
        assert_eq!(record.get("user_read_at"), None);
        assert_eq!(record.get("author"), None);
    }
}
