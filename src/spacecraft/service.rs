//! # Spacecraft Service
//!
//! Validates incoming drafts, assigns identity on creation and delegates
//! persistence to a [`SpacecraftRepository`].

use http::uri::{PathAndQuery, Uri};
use tracing::{debug, info};
use uuid::Uuid;

use super::entity::{Spacecraft, SpacecraftDraft, Status};
use super::error::{ServiceResult, ValidationError};
use super::filter::Filter;
use super::repository::SpacecraftRepository;

/// Domain service for spacecraft
pub struct SpacecraftService<R> {
    repo: R,
}

impl<R: SpacecraftRepository> SpacecraftService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List spacecraft, rejecting filters outside the allow-list
    pub fn list(&self, filters: &[Filter]) -> ServiceResult<Vec<Spacecraft>> {
        for filter in filters {
            if let Err(err) = filter.parsed_key() {
                debug!(key = %filter.key, "rejected list filter");
                return Err(err.into());
            }
        }

        Ok(self.repo.list(filters)?)
    }

    pub fn get(&self, id: Uuid) -> ServiceResult<Spacecraft> {
        Ok(self.repo.get(id)?)
    }

    /// Validate and store a new spacecraft under a freshly generated id
    pub fn create(&self, draft: SpacecraftDraft) -> ServiceResult<Spacecraft> {
        let spacecraft = validate_draft(Uuid::new_v4(), draft)?;
        self.repo.create(&spacecraft)?;

        info!(id = %spacecraft.id, name = %spacecraft.name, "spacecraft created");
        Ok(spacecraft)
    }

    /// Validate and replace every field of the spacecraft with `id`
    pub fn update(&self, id: Uuid, draft: SpacecraftDraft) -> ServiceResult<Spacecraft> {
        let spacecraft = validate_draft(id, draft)?;
        self.repo.update(&spacecraft)?;

        info!(id = %spacecraft.id, "spacecraft updated");
        Ok(spacecraft)
    }

    pub fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.repo.delete(id)?;

        info!(id = %id, "spacecraft deleted");
        Ok(())
    }
}

/// Check a draft and turn it into an entity carrying `id`
fn validate_draft(id: Uuid, draft: SpacecraftDraft) -> Result<Spacecraft, ValidationError> {
    validate_image(&draft.image).inspect_err(|_| {
        debug!(image = %draft.image, "rejected spacecraft image");
    })?;
    let status = validate_status(&draft.status).inspect_err(|_| {
        debug!(status = %draft.status, "rejected spacecraft status");
    })?;

    Ok(Spacecraft {
        id,
        name: draft.name,
        class: draft.class,
        armaments: draft.armaments,
        crew: draft.crew,
        image: draft.image,
        value: draft.value,
        status,
    })
}

/// The image must be a URL reference, absolute (`http://x/img.png`,
/// `data:image/png;base64,..`) or relative (`/img.png`, `img.png`)
pub fn validate_image(image: &str) -> Result<(), ValidationError> {
    if image.is_empty() || !has_valid_escapes(image) {
        return Err(ValidationError::InvalidImage);
    }

    // A colon before any '/', '?' or '#' ends a scheme
    let valid = match image.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
        Some(end) if image[end..].starts_with(':') => {
            let rest = &image[end + 1..];
            is_scheme(&image[..end])
                && if rest.starts_with("//") {
                    image.parse::<Uri>().is_ok()
                } else {
                    rest.is_empty() || rest.parse::<PathAndQuery>().is_ok()
                }
        }
        _ => image.parse::<PathAndQuery>().is_ok(),
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidImage)
    }
}

fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Every '%' must start a two-digit hex escape
fn has_valid_escapes(image: &str) -> bool {
    let bytes = image.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

pub fn validate_status(status: &str) -> Result<Status, ValidationError> {
    status.parse()
}
