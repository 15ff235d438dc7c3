use std::collections::BTreeSet;

use rolo_types::{Contact, ContactId};

/// Derive the effective contact list.
///
/// Local additions come first (newest first, as stored), followed by remote
/// contacts whose id is not tombstoned, in their original fetch order. Batches
/// are small (≤ a few hundred records) so this recomputes from scratch on
/// every input change.
pub fn combined_view(
    added: &[Contact],
    remote: &[Contact],
    deleted: &BTreeSet<ContactId>,
) -> Vec<Contact> {
    let mut view = Vec::with_capacity(added.len() + remote.len());
    view.extend(added.iter().cloned());
    view.extend(
        remote
            .iter()
            .filter(|c| !deleted.contains(&c.id))
            .cloned(),
    );
    view
}

/// Filter contacts by a case-insensitive substring match on first or last
/// name. An empty query returns the input unchanged.
pub fn filter_by_query(contacts: &[Contact], query: &str) -> Vec<Contact> {
    if query.is_empty() {
        return contacts.to_vec();
    }
    let q = query.to_lowercase();
    contacts
        .iter()
        .filter(|c| {
            c.first_name.to_lowercase().contains(&q) || c.last_name.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolo_types::Origin;

    fn contact(id: &str, first: &str, last: &str, origin: Origin) -> Contact {
        Contact {
            id: ContactId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "555-0100".to_string(),
            avatar: None,
            origin,
        }
    }

    #[test]
    fn added_precede_remote_and_orders_are_preserved() {
        let added = vec![
            contact("l2", "Zara", "Young", Origin::Local),
            contact("l1", "Ann", "Lee", Origin::Local),
        ];
        let remote = vec![
            contact("r1", "Bea", "Kaur", Origin::Remote),
            contact("r2", "Raj", "Iyer", Origin::Remote),
        ];
        let view = combined_view(&added, &remote, &BTreeSet::new());

        let ids: Vec<&str> = view.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["l2", "l1", "r1", "r2"]);
    }

    #[test]
    fn tombstoned_remote_contacts_are_excluded() {
        let remote = vec![
            contact("r1", "Bea", "Kaur", Origin::Remote),
            contact("r2", "Raj", "Iyer", Origin::Remote),
            contact("r3", "Mira", "Shah", Origin::Remote),
        ];
        let mut deleted = BTreeSet::new();
        deleted.insert(ContactId::new("r2"));

        let view = combined_view(&[], &remote, &deleted);
        let ids: Vec<&str> = view.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn tombstones_never_touch_added_contacts() {
        let added = vec![contact("x1", "Ann", "Lee", Origin::Local)];
        let mut deleted = BTreeSet::new();
        // A tombstone only applies to the remote list, even with a matching id.
        deleted.insert(ContactId::new("x1"));

        let view = combined_view(&added, &[], &deleted);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id.as_str(), "x1");
    }

    #[test]
    fn empty_remote_batch_yields_added_only() {
        let added = vec![contact("l1", "Ann", "Lee", Origin::Local)];
        let view = combined_view(&added, &[], &BTreeSet::new());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id.as_str(), "l1");
    }

    #[test]
    fn filter_is_case_insensitive_on_either_name() {
        let contacts = vec![
            contact("1", "Ann", "Lee", Origin::Local),
            contact("2", "Bea", "Annandale", Origin::Remote),
            contact("3", "Raj", "Iyer", Origin::Remote),
        ];
        let hits = filter_by_query(&contacts, "ANN");
        let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn empty_query_returns_everything() {
        let contacts = vec![
            contact("1", "Ann", "Lee", Origin::Local),
            contact("2", "Raj", "Iyer", Origin::Remote),
        ];
        assert_eq!(filter_by_query(&contacts, "").len(), 2);
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let contacts = vec![contact("1", "Ann", "Lee", Origin::Local)];
        assert!(filter_by_query(&contacts, "zzz").is_empty());
    }

    #[test]
    fn added_then_search_finds_the_new_contact() {
        let added = vec![contact("new", "Ann", "Lee", Origin::Local)];
        let remote = vec![contact("r1", "Raj", "Iyer", Origin::Remote)];
        let view = combined_view(&added, &remote, &BTreeSet::new());
        let hits = filter_by_query(&view, "ann");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "new");
    }
}
