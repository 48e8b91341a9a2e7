use std::io::Write;

use crate::core::identity::HostIdentity;
use crate::errors::IdentityError;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

pub fn to_json(identity: &HostIdentity) -> Result<String, IdentityError> {
    Ok(serde_json::to_string(identity)?)
}

/// Writes the document with no framing around it.
pub fn write_json<W: Write>(writer: &mut W, identity: &HostIdentity) -> Result<(), IdentityError> {
    serde_json::to_writer(&mut *writer, identity)?;
    writer.flush()?;
    Ok(())
}
