use async_trait::async_trait;
use futures::future::join_all;

use crate::{
    entities::image::{filter_images, ImageDescriptor, ImageListResponse, StoredImage},
    errors::ClientError,
    utils::clipboard::{copy_with_fallback, Clipboard, CopyMethod, ManualCopy},
};

pub const LOAD_FAILED_ALERT: &str = "Failed to load images";
pub const UPLOAD_FAILED_ALERT: &str = "Failed to upload images";
pub const UPLOAD_SUCCESS_ALERT: &str = "Images uploaded successfully!";
pub const URL_COPIED_ALERT: &str = "URL copied to clipboard!";

/// The two gallery endpoints as seen from the page.
#[async_trait]
pub trait GalleryApi: Send + Sync {
    async fn fetch_images(&self) -> Result<ImageListResponse, ClientError>;
    async fn upload_image(&self, file: &SelectedFile) -> Result<ImageDescriptor, ClientError>;
}

/// Blocking user notification.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// A file picked in the dialog or dropped on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    /// Declared MIME type, may be empty.
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        SelectedFile {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    /// Anything other than `list` means grid.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(p) if p.eq_ignore_ascii_case("list") => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop(Vec<SelectedFile>),
}

/// View state of the gallery page. Flags are independent of each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    pub images: Vec<StoredImage>,
    pub loading: bool,
    pub uploading: bool,
    pub drag_active: bool,
    pub search_term: String,
    pub view_mode: ViewMode,
}

/// Page controller: owns the view state and drives the two endpoints.
pub struct GalleryPage<A, N>
where
    A: GalleryApi,
    N: Notifier,
{
    api: A,
    notifier: N,
    state: GalleryState,
}

impl<A, N> GalleryPage<A, N>
where
    A: GalleryApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N) -> Self {
        GalleryPage {
            api,
            notifier,
            state: GalleryState::default(),
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Initial load.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Replaces the image set with a fresh listing.
    pub async fn refresh(&mut self) {
        self.state.loading = true;

        match self.api.fetch_images().await {
            Ok(listing) => {
                self.state.images = listing.images.into_iter().map(StoredImage::from).collect();
            }
            Err(e) => {
                tracing::error!("Fetching images failed: {}", e);
                self.state.images.clear();
                self.notifier.alert(LOAD_FAILED_ALERT);
            }
        }

        self.state.loading = false;
    }

    /// Uploads every image among `files` concurrently, then reloads the listing.
    ///
    /// One failed upload fails the whole batch from the page's point of view,
    /// even when the other files were stored.
    pub async fn handle_files(&mut self, files: Vec<SelectedFile>) {
        let images: Vec<SelectedFile> = files.into_iter().filter(SelectedFile::is_image).collect();
        if images.is_empty() {
            return;
        }

        self.state.uploading = true;

        let results = join_all(images.iter().map(|file| self.api.upload_image(file))).await;

        match results.into_iter().collect::<Result<Vec<_>, _>>() {
            Ok(uploaded) => {
                tracing::info!("Uploaded {} image(s)", uploaded.len());
                self.notifier.alert(UPLOAD_SUCCESS_ALERT);
            }
            Err(e) => {
                tracing::error!("Uploading images failed: {}", e);
                self.notifier.alert(UPLOAD_FAILED_ALERT);
            }
        }

        self.refresh().await;
        self.state.uploading = false;
    }

    pub async fn handle_drag(&mut self, event: DragEvent) {
        match event {
            DragEvent::Enter | DragEvent::Over => self.state.drag_active = true,
            DragEvent::Leave => self.state.drag_active = false,
            DragEvent::Drop(files) => {
                self.state.drag_active = false;
                self.handle_files(files).await;
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
    }

    pub fn toggle_view(&mut self) {
        self.state.view_mode = self.state.view_mode.toggled();
    }

    /// Current image set narrowed by the search term.
    pub fn visible_images(&self) -> Vec<&StoredImage> {
        filter_images(&self.state.images, &self.state.search_term)
    }

    pub fn copy_url(
        &self,
        url: &str,
        clipboard: Option<&dyn Clipboard>,
        fallback: &dyn ManualCopy,
    ) -> CopyMethod {
        let method = copy_with_fallback(clipboard, fallback, url);
        self.notifier.alert(URL_COPIED_ALERT);
        method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::{
        cell::RefCell,
        sync::atomic::{AtomicUsize, Ordering},
    };

    #[derive(Default)]
    struct Alerts(RefCell<Vec<String>>);

    impl Notifier for Alerts {
        fn alert(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    struct FakeApi {
        listing: Vec<&'static str>,
        fail_fetch: bool,
        fail_upload_named: Option<&'static str>,
        uploads: AtomicUsize,
    }

    impl FakeApi {
        fn with_listing(listing: Vec<&'static str>) -> Self {
            FakeApi {
                listing,
                fail_fetch: false,
                fail_upload_named: None,
                uploads: AtomicUsize::new(0),
            }
        }
    }

    fn descriptor(public_id: &str) -> ImageDescriptor {
        ImageDescriptor {
            public_id: public_id.to_string(),
            secure_url: format!("https://res.test/{public_id}"),
            width: None,
            height: None,
            format: None,
            bytes: None,
            created_at: Utc::now(),
            original_filename: None,
        }
    }

    #[async_trait]
    impl GalleryApi for FakeApi {
        async fn fetch_images(&self) -> Result<ImageListResponse, ClientError> {
            if self.fail_fetch {
                return Err(ClientError::Status { status: 500, message: "Failed to fetch images".into() });
            }
            Ok(ImageListResponse {
                images: self.listing.iter().map(|id| descriptor(id)).collect(),
                total_count: self.listing.len() as u64,
            })
        }

        async fn upload_image(&self, file: &SelectedFile) -> Result<ImageDescriptor, ClientError> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            if self.fail_upload_named == Some(file.name.as_str()) {
                return Err(ClientError::Status { status: 500, message: "Upload failed".into() });
            }
            Ok(descriptor(&format!("gallery/{}", file.name)))
        }
    }

    #[tokio::test]
    async fn mount_populates_images_and_clears_loading() {
        let mut page = GalleryPage::new(FakeApi::with_listing(vec!["gallery/a", "gallery/b"]), Alerts::default());
        page.mount().await;

        assert!(!page.state().loading);
        assert_eq!(page.state().images.len(), 2);
        assert_eq!(page.state().images[0].original_name, "a");
        assert!(page.notifier().0.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_mount_alerts_and_leaves_set_empty() {
        let api = FakeApi { fail_fetch: true, ..FakeApi::with_listing(vec!["gallery/a"]) };
        let mut page = GalleryPage::new(api, Alerts::default());
        page.mount().await;

        assert!(!page.state().loading);
        assert!(page.state().images.is_empty());
        assert_eq!(*page.notifier().0.borrow(), vec![LOAD_FAILED_ALERT.to_string()]);
    }

    #[tokio::test]
    async fn only_image_files_are_uploaded() {
        let mut page = GalleryPage::new(FakeApi::with_listing(vec![]), Alerts::default());
        page.handle_drag(DragEvent::Drop(vec![
            SelectedFile::new("a.png", "image/png", vec![1]),
            SelectedFile::new("notes.txt", "text/plain", vec![2]),
            SelectedFile::new("b.jpg", "image/jpeg", vec![3]),
        ]))
        .await;

        assert_eq!(page.api().uploads.load(Ordering::SeqCst), 2);
        assert!(!page.state().uploading);
        assert_eq!(*page.notifier().0.borrow(), vec![UPLOAD_SUCCESS_ALERT.to_string()]);
    }

    #[tokio::test]
    async fn no_qualifying_files_is_a_no_op() {
        let mut page = GalleryPage::new(FakeApi::with_listing(vec![]), Alerts::default());
        page.handle_files(vec![SelectedFile::new("notes.txt", "text/plain", vec![1])]).await;

        assert_eq!(page.api().uploads.load(Ordering::SeqCst), 0);
        assert!(page.notifier().0.borrow().is_empty());
    }

    #[tokio::test]
    async fn one_failure_fails_the_batch_with_a_single_alert() {
        let api = FakeApi { fail_upload_named: Some("b.png"), ..FakeApi::with_listing(vec!["gallery/a.png"]) };
        let mut page = GalleryPage::new(api, Alerts::default());
        page.handle_files(vec![
            SelectedFile::new("a.png", "image/png", vec![1]),
            SelectedFile::new("b.png", "image/png", vec![2]),
        ])
        .await;

        assert_eq!(page.api().uploads.load(Ordering::SeqCst), 2);
        assert!(!page.state().uploading);
        assert_eq!(*page.notifier().0.borrow(), vec![UPLOAD_FAILED_ALERT.to_string()]);
        // listing is still refreshed afterwards
        assert_eq!(page.state().images.len(), 1);
    }

    #[tokio::test]
    async fn drag_events_toggle_active_flag() {
        let mut page = GalleryPage::new(FakeApi::with_listing(vec![]), Alerts::default());

        page.handle_drag(DragEvent::Enter).await;
        assert!(page.state().drag_active);
        page.handle_drag(DragEvent::Leave).await;
        assert!(!page.state().drag_active);
        page.handle_drag(DragEvent::Over).await;
        assert!(page.state().drag_active);
        page.handle_drag(DragEvent::Drop(vec![])).await;
        assert!(!page.state().drag_active);
    }

    #[tokio::test]
    async fn search_and_view_mode_are_local() {
        let mut page = GalleryPage::new(FakeApi::with_listing(vec!["gallery/Cat", "gallery/dog"]), Alerts::default());
        page.mount().await;

        page.set_search_term("CAT");
        let visible: Vec<_> = page.visible_images().iter().map(|i| i.public_id.clone()).collect();
        assert_eq!(visible, vec!["gallery/Cat"]);

        page.set_search_term("");
        assert_eq!(page.visible_images().len(), 2);

        assert_eq!(page.state().view_mode, ViewMode::Grid);
        page.toggle_view();
        assert_eq!(page.state().view_mode, ViewMode::List);
        page.toggle_view();
        assert_eq!(page.state().view_mode, ViewMode::Grid);
    }

    #[test]
    fn copy_url_always_confirms() {
        struct NoopCopy;
        impl ManualCopy for NoopCopy {
            fn copy_via_hidden_field(&self, _: &str) {}
        }

        let page = GalleryPage::new(FakeApi::with_listing(vec![]), Alerts::default());
        let method = page.copy_url("https://res.test/a", None, &NoopCopy);

        assert_eq!(method, CopyMethod::Fallback);
        assert_eq!(*page.notifier().0.borrow(), vec![URL_COPIED_ALERT.to_string()]);
    }

    #[test]
    fn view_param_parsing() {
        assert_eq!(ViewMode::from_param(Some("LIST")), ViewMode::List);
        assert_eq!(ViewMode::from_param(Some("grid")), ViewMode::Grid);
        assert_eq!(ViewMode::from_param(None), ViewMode::Grid);
    }
}
