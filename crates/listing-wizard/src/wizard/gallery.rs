//! Cover and extra-photo slots for the gallery uploader.
//!
//! Each accepted photo leases a preview handle from a [`PreviewRegistry`].
//! Handles release themselves on drop, so replacing, removing or discarding
//! an upload never leaves a live preview behind.

use super::domain::FormIssue;
use super::forms::{GalleryPayload, MediaRef, MAX_ADDITIONAL_PHOTOS};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct PreviewLedger {
    next_id: u64,
    live: BTreeSet<u64>,
}

/// Issues preview handles and tracks which ones are still live.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    ledger: Rc<RefCell<PreviewLedger>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lease(&self, media: &MediaRef) -> PreviewHandle {
        let mut ledger = self.ledger.borrow_mut();
        ledger.next_id += 1;
        let id = ledger.next_id;
        ledger.live.insert(id);
        debug!(preview = id, file = %media.file_name, "preview leased");

        PreviewHandle {
            id,
            url: format!("blob:preview/{id}"),
            ledger: Rc::clone(&self.ledger),
        }
    }

    pub fn live_count(&self) -> usize {
        self.ledger.borrow().live.len()
    }

    pub fn is_live(&self, id: u64) -> bool {
        self.ledger.borrow().live.contains(&id)
    }
}

/// A live preview URL. Dropping the handle revokes it.
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    url: String,
    ledger: Rc<RefCell<PreviewLedger>>,
}

impl PreviewHandle {
    pub const fn id(&self) -> u64 {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if self.ledger.borrow_mut().live.remove(&self.id) {
            debug!(preview = self.id, "preview revoked");
        }
    }
}

#[derive(Debug)]
pub struct UploadedPhoto {
    pub media: MediaRef,
    pub preview: PreviewHandle,
}

impl UploadedPhoto {
    pub const fn id(&self) -> u64 {
        self.preview.id()
    }
}

/// Outcome of dropping several files onto the extra-photo area.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub accepted: Vec<u64>,
    pub rejected: Vec<(String, FormIssue)>,
    /// Valid files left out because every slot was taken.
    pub overflow: usize,
}

#[derive(Debug)]
pub struct GallerySlots {
    previews: PreviewRegistry,
    cover: Option<UploadedPhoto>,
    more: Vec<UploadedPhoto>,
}

impl GallerySlots {
    pub fn new(previews: PreviewRegistry) -> Self {
        Self {
            previews,
            cover: None,
            more: Vec::new(),
        }
    }

    /// Rebuilds the slots from an earlier submission, leasing fresh previews.
    /// Files go through the same checks as new uploads; a rejected cover is
    /// reported in the outcome alongside the extras.
    pub fn from_payload(
        previews: PreviewRegistry,
        payload: &GalleryPayload,
    ) -> (Self, BatchOutcome) {
        let mut slots = Self::new(previews);
        let mut cover_issue = None;
        if let Some(media) = payload.cover.clone() {
            let file_name = media.file_name.clone();
            if let Err(issue) = slots.set_cover(media) {
                cover_issue = Some((file_name, issue));
            }
        }

        let mut outcome = slots.add_more(payload.more.iter().cloned());
        if let Some(rejected) = cover_issue {
            outcome.rejected.insert(0, rejected);
        }
        if outcome.overflow > 0 {
            warn!(dropped = outcome.overflow, "stored gallery exceeds the extra photo slots");
        }

        (slots, outcome)
    }

    pub fn cover(&self) -> Option<&UploadedPhoto> {
        self.cover.as_ref()
    }

    pub fn more(&self) -> &[UploadedPhoto] {
        &self.more
    }

    pub fn slots_left(&self) -> usize {
        MAX_ADDITIONAL_PHOTOS.saturating_sub(self.more.len())
    }

    /// Replaces the cover; the previous cover's preview is revoked.
    pub fn set_cover(&mut self, media: MediaRef) -> Result<u64, FormIssue> {
        if let Some(issue) = media.photo_issue() {
            warn!(file = %media.file_name, reason = issue.message, "cover rejected");
            return Err(issue);
        }

        let preview = self.previews.lease(&media);
        let id = preview.id();
        self.cover = Some(UploadedPhoto { media, preview });
        Ok(id)
    }

    pub fn remove_cover(&mut self) -> bool {
        self.cover.take().is_some()
    }

    /// Accepts valid files in order until the six extra slots are full.
    pub fn add_more<I>(&mut self, files: I) -> BatchOutcome
    where
        I: IntoIterator<Item = MediaRef>,
    {
        let mut outcome = BatchOutcome::default();

        for media in files {
            if let Some(issue) = media.photo_issue() {
                warn!(file = %media.file_name, reason = issue.message, "photo rejected");
                outcome.rejected.push((media.file_name, issue));
                continue;
            }
            if self.slots_left() == 0 {
                outcome.overflow += 1;
                continue;
            }

            let preview = self.previews.lease(&media);
            outcome.accepted.push(preview.id());
            self.more.push(UploadedPhoto { media, preview });
        }

        outcome
    }

    pub fn remove_more(&mut self, id: u64) -> bool {
        let before = self.more.len();
        self.more.retain(|photo| photo.id() != id);
        self.more.len() != before
    }

    pub fn to_payload(&self) -> GalleryPayload {
        GalleryPayload {
            cover: self.cover.as_ref().map(|photo| photo.media.clone()),
            more: self.more.iter().map(|photo| photo.media.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> MediaRef {
        MediaRef::new(name, "image/png", 2048)
    }

    #[test]
    fn replacing_the_cover_revokes_the_previous_preview() {
        let previews = PreviewRegistry::new();
        let mut slots = GallerySlots::new(previews.clone());

        let first = slots.set_cover(png("front.png")).expect("cover accepted");
        let second = slots.set_cover(png("side.png")).expect("cover accepted");

        assert!(!previews.is_live(first));
        assert!(previews.is_live(second));
        assert_eq!(previews.live_count(), 1);
    }

    #[test]
    fn rejected_cover_keeps_the_current_one() {
        let previews = PreviewRegistry::new();
        let mut slots = GallerySlots::new(previews.clone());
        let id = slots.set_cover(png("front.png")).expect("cover accepted");

        let issue = slots
            .set_cover(MediaRef::new("plan.pdf", "application/pdf", 10))
            .expect_err("pdf is not a photo");

        assert_eq!(issue.message, "Please upload only JPG or PNG files");
        assert!(previews.is_live(id));
        assert_eq!(
            slots.cover().map(|photo| photo.media.file_name.as_str()),
            Some("front.png")
        );
    }

    #[test]
    fn extra_photos_stop_at_six_slots() {
        let previews = PreviewRegistry::new();
        let mut slots = GallerySlots::new(previews.clone());

        let files = (0..8).map(|idx| png(&format!("{idx}.png")));
        let outcome = slots.add_more(files);

        assert_eq!(outcome.accepted.len(), MAX_ADDITIONAL_PHOTOS);
        assert_eq!(outcome.overflow, 2);
        assert_eq!(slots.slots_left(), 0);
        assert_eq!(previews.live_count(), MAX_ADDITIONAL_PHOTOS);
    }

    #[test]
    fn invalid_extra_photos_are_reported_and_skipped() {
        let mut slots = GallerySlots::new(PreviewRegistry::new());
        let outcome = slots.add_more(vec![
            png("a.png"),
            MediaRef::new("b.gif", "image/gif", 10),
            MediaRef::new("c.jpg", "image/jpeg", 11 * 1024 * 1024),
        ]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.rejected[1].1.message, "File size should be less than 10MB");
    }

    #[test]
    fn removing_and_dropping_revokes_previews() {
        let previews = PreviewRegistry::new();
        let mut slots = GallerySlots::new(previews.clone());
        slots.set_cover(png("front.png")).expect("cover accepted");
        let outcome = slots.add_more(vec![png("a.png"), png("b.png")]);

        assert!(slots.remove_more(outcome.accepted[0]));
        assert!(!slots.remove_more(outcome.accepted[0]));
        assert_eq!(previews.live_count(), 2);

        assert!(slots.remove_cover());
        assert_eq!(previews.live_count(), 1);

        drop(slots);
        assert_eq!(previews.live_count(), 0);
    }

    #[test]
    fn payload_round_trips_through_slots() {
        let previews = PreviewRegistry::new();
        let payload = GalleryPayload {
            cover: Some(png("front.png")),
            more: vec![png("a.png")],
        };

        let (slots, outcome) = GallerySlots::from_payload(previews.clone(), &payload);
        assert_eq!(previews.live_count(), 2);
        assert_eq!(outcome.accepted.len(), 1);
        assert!(outcome.rejected.is_empty());
        assert_eq!(slots.to_payload(), payload);
    }

    #[test]
    fn oversized_stored_gallery_reports_the_photos_it_cannot_hold() {
        let previews = PreviewRegistry::new();
        let payload = GalleryPayload {
            cover: Some(png("front.png")),
            more: (0..8).map(|idx| png(&format!("{idx}.png"))).collect(),
        };

        let (slots, outcome) = GallerySlots::from_payload(previews.clone(), &payload);

        assert_eq!(outcome.accepted.len(), MAX_ADDITIONAL_PHOTOS);
        assert_eq!(outcome.overflow, 2);
        assert_eq!(slots.to_payload().more, payload.more[..MAX_ADDITIONAL_PHOTOS].to_vec());
        assert_eq!(previews.live_count(), MAX_ADDITIONAL_PHOTOS + 1);
    }

    #[test]
    fn stored_gallery_with_a_bad_cover_reports_it() {
        let previews = PreviewRegistry::new();
        let payload = GalleryPayload {
            cover: Some(MediaRef::new("front.gif", "image/gif", 10)),
            more: vec![png("a.png")],
        };

        let (slots, outcome) = GallerySlots::from_payload(previews.clone(), &payload);

        assert!(slots.cover().is_none());
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].0, "front.gif");
        assert_eq!(previews.live_count(), 1);
    }
}
