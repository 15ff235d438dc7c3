use rolo_types::Contact;

/// Catch-all group for names that do not start with an ASCII letter.
pub const CATCH_ALL: char = '#';

/// Contacts sharing an index letter, in full-name order.
#[derive(Debug, Clone)]
pub struct LetterGroup {
    pub letter: char,
    pub contacts: Vec<Contact>,
}

/// Alphabetically grouped contacts with a jump index.
#[derive(Debug, Clone, Default)]
pub struct GroupedContacts {
    pub groups: Vec<LetterGroup>,
}

impl GroupedContacts {
    /// Ordered letters for the jump sidebar.
    pub fn index(&self) -> Vec<char> {
        self.groups.iter().map(|g| g.letter).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.contacts.len()).sum()
    }
}

/// Index letter for a contact: uppercase first ASCII letter of the first
/// name, falling back to the last name, else the catch-all group.
fn index_letter(contact: &Contact) -> char {
    let name = if contact.first_name.trim().is_empty() {
        &contact.last_name
    } else {
        &contact.first_name
    };
    match name.trim().chars().next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => CATCH_ALL,
    }
}

/// Sort contacts lexicographically by full name (case-insensitive) and
/// cluster them by index letter. Letter groups come out A..Z with the
/// catch-all group last.
pub fn group_by_letter(contacts: &[Contact]) -> GroupedContacts {
    let mut keyed: Vec<(char, Contact)> = contacts
        .iter()
        .cloned()
        .map(|c| (index_letter(&c), c))
        .collect();
    // Catch-all sorts after 'Z' while letters keep alphabetical order.
    keyed.sort_by_key(|(letter, c)| {
        let rank = if *letter == CATCH_ALL { u32::MAX } else { *letter as u32 };
        (rank, c.full_name().to_lowercase())
    });

    let mut groups: Vec<LetterGroup> = Vec::new();
    for (letter, contact) in keyed {
        match groups.last_mut() {
            Some(group) if group.letter == letter => group.contacts.push(contact),
            _ => groups.push(LetterGroup {
                letter,
                contacts: vec![contact],
            }),
        }
    }
    GroupedContacts { groups }
}
