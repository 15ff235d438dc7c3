use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::avatar;
use crate::context::ExecutionContext;
use crate::output;
use crate::types::OutputFormat;
use rolo_types::{Avatar, Contact, ContactId, Origin};

pub fn handle(
    ctx: &ExecutionContext,
    first: String,
    last: String,
    email: String,
    phone: String,
    avatar_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let first = first.trim().to_string();
    let last = last.trim().to_string();
    let email = email.trim().to_string();
    let phone = phone.trim().to_string();

    if first.is_empty() || last.is_empty() || email.is_empty() || phone.is_empty() {
        bail!("first, last, email and phone must all be non-empty");
    }

    // An unusable avatar is dropped with a warning; the contact still lands.
    let avatar = avatar_path.and_then(|path| match avatar::load_data_url(&path) {
        Ok(data_url) => Some(Avatar::embedded(data_url)),
        Err(err) => {
            eprintln!("Warning: ignoring avatar: {}", err);
            None
        }
    });

    let contact = Contact {
        id: ContactId::generate(),
        first_name: first,
        last_name: last,
        email,
        phone,
        avatar,
        origin: Origin::Local,
    };

    let mut store = ctx.open_store();
    store.add(contact.clone())?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&contact)?);
    } else {
        println!("Added {} ({})", contact.full_name(), contact.id);
        output::print_contact_card(&contact);
    }

    Ok(())
}
