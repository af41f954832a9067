use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::auth::{AuthRequest, Authorize, HttpAuthorizer};
use crate::config::PlayerConfig;
use crate::layout::{self, Rotate, Sizing};
use crate::{AuthPayload, Backend, Error, OnState, Overlay, PlaybackState, Player, ResizeListener, ResizeSignal, Surface};

type StateListener = Arc<dyn Fn(&PlaybackState) + Send + Sync>;

/// State that outlives individual mounts.
#[derive(Default)]
struct Shared {
	state: Mutex<PlaybackState>,
	listener: Mutex<Option<StateListener>>,
}

impl Shared {
	fn update(&self, state: PlaybackState) {
		*self.state.lock() = state.clone();

		// Don't hold any lock while the host runs.
		let listener = self.listener.lock().clone();
		if let Some(listener) = listener {
			listener(&state);
		}
	}
}

/// The resources of a single mount.
struct Mount {
	// Cleared on teardown; late callbacks and tasks check it before acting.
	alive: AtomicBool,
	player: Mutex<Box<dyn Player>>,
	surface: Arc<dyn Surface>,
	sizing: Sizing,
	rotate: Rotate,
}

impl Mount {
	fn is_alive(&self) -> bool {
		self.alive.load(Ordering::Acquire)
	}

	fn relayout(&self) {
		if !self.is_alive() {
			return;
		}

		let (Some(video), Some(container)) = (self.surface.video_size(), self.surface.container_size()) else {
			return;
		};

		// Unusable sizes keep whatever placement was applied last.
		if let Some(placement) = layout::fit(video, container, self.sizing, self.rotate) {
			tracing::trace!(%video, %container, %placement, "relayout");
			self.surface.place(&placement);
		}
	}

	fn connect(&self, stream_name: &str, auth: Option<AuthPayload>) {
		if !self.is_alive() {
			tracing::debug!(stream = %stream_name, "frame unmounted, not connecting");
			return;
		}

		tracing::info!(stream = %stream_name, authorized = auth.is_some(), "connecting");
		self.player.lock().connect(stream_name, auth);
	}
}

struct Mounted {
	mount: Arc<Mount>,

	// Deregisters on drop.
	_resize: ResizeListener,

	// Dropping the sender cancels a pending autoplay.
	_autoplay: Option<oneshot::Sender<()>>,
}

/// Binds an external player to a surface for the duration of a mount.
///
/// Must be used within a tokio runtime: autoplay and authorized playback spawn tasks.
pub struct Frame {
	config: Arc<PlayerConfig>,
	authorizer: Option<Arc<dyn Authorize>>,
	shared: Arc<Shared>,
	mounted: Option<Mounted>,
}

impl Frame {
	/// Create an unmounted frame.
	///
	/// When `auth.url` is configured, playback goes through an [`HttpAuthorizer`] for that backend.
	pub fn new(config: PlayerConfig) -> Result<Self, Error> {
		let authorizer = match &config.auth.url {
			Some(url) => {
				let authorizer = HttpAuthorizer::new(url)
					.map_err(|err| Error::InvalidArgument(format!("invalid auth url {url}: {err}")))?;
				Some(Arc::new(authorizer) as Arc<dyn Authorize>)
			}
			None => None,
		};

		Ok(Self {
			config: Arc::new(config),
			authorizer,
			shared: Default::default(),
			mounted: None,
		})
	}

	/// Authorize playback with a custom token source, replacing any configured endpoint.
	pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorize>) -> Self {
		self.authorizer = Some(authorizer);
		self
	}

	pub fn config(&self) -> &PlayerConfig {
		&self.config
	}

	/// Register the host's listener for player state changes, replacing any previous one.
	///
	/// The listener may run on any thread and must not call back into the frame synchronously.
	pub fn on_state_changed<F>(&self, listener: F)
	where
		F: Fn(&PlaybackState) + Send + Sync + 'static,
	{
		*self.shared.listener.lock() = Some(Arc::new(listener));
	}

	pub fn is_mounted(&self) -> bool {
		self.mounted.is_some()
	}

	/// Create the player against `surface` and start tracking `resize`.
	///
	/// Returns `false` without side effects when the surface doesn't exist yet (try again later)
	/// or when the frame is already mounted.
	pub fn mount<B>(&mut self, surface: Option<Arc<dyn Surface>>, backend: &B, resize: &ResizeSignal) -> bool
	where
		B: Backend + ?Sized,
	{
		if self.mounted.is_some() {
			tracing::warn!("frame already mounted");
			return false;
		}

		let Some(surface) = surface else {
			tracing::debug!("surface not available yet");
			return false;
		};

		let config = &self.config;
		let shared = self.shared.clone();

		let mount = Arc::new_cyclic(|weak: &Weak<Mount>| {
			let weak = weak.clone();
			let on_state = OnState::new(move |state| {
				let Some(mount) = weak.upgrade().filter(|mount| mount.is_alive()) else {
					tracing::trace!(?state, "ignoring state from an unmounted player");
					return;
				};

				tracing::debug!(?state, "player state changed");
				shared.update(state);

				// The intrinsic video size may have just become known.
				mount.relayout();
			});

			let mut player = backend.create(config, surface.clone(), on_state);
			if config.disable_audio() {
				player.set_muted(true);
			}

			Mount {
				alive: AtomicBool::new(true),
				player: Mutex::new(player),
				surface,
				sizing: config.sizing(),
				rotate: config.rotate(),
			}
		});

		let resize = {
			let weak = Arc::downgrade(&mount);
			resize.subscribe(move || {
				if let Some(mount) = weak.upgrade() {
					mount.relayout();
				}
			})
		};

		mount.relayout();

		let autoplay = self.config.auto_play().then(|| self.schedule_autoplay(&mount));

		tracing::debug!(sizing = %self.config.sizing(), rotate = %self.config.rotate(), "mounted");

		self.mounted = Some(Mounted {
			mount,
			_resize: resize,
			_autoplay: autoplay,
		});

		true
	}

	fn schedule_autoplay(&self, mount: &Arc<Mount>) -> oneshot::Sender<()> {
		let (cancel, cancelled) = oneshot::channel();

		let config = self.config.clone();
		let authorizer = self.authorizer.clone();
		let mount = Arc::downgrade(mount);
		let delay = self.config.auto_play_delay();

		tokio::spawn(async move {
			tokio::select! {
				// No more sender, which means the frame was torn down.
				_ = cancelled => return,
				_ = tokio::time::sleep(delay) => {},
			}

			let Some(mount) = mount.upgrade() else { return };
			if let Err(err) = start(&config, authorizer.as_ref(), Some(&mount)) {
				tracing::warn!(%err, "autoplay failed");
			}
		});

		cancel
	}

	/// Start playing the configured stream.
	///
	/// Fails when no stream name is configured, or when authorized playback lacks a user or app.
	/// An authorized attempt is otherwise fire-and-forget: a rejected request is logged and playback abandoned.
	pub fn play(&self) -> Result<(), Error> {
		start(&self.config, self.authorizer.as_ref(), self.current())
	}

	/// The action behind the error overlay.
	pub fn retry(&self) -> Result<(), Error> {
		self.play()
	}

	pub fn stop(&self) {
		if let Some(mount) = self.current() {
			tracing::info!("stopping");
			mount.player.lock().stop();
		}
	}

	/// Clear the player's muted state, the action behind the unmute overlay.
	pub fn unmute(&self) {
		if let Some(mount) = self.current() {
			mount.player.lock().set_muted(false);
		}
	}

	pub fn is_playing(&self) -> bool {
		self.current().is_some_and(|mount| mount.player.lock().is_playing())
	}

	pub fn is_muted(&self) -> bool {
		self.current().is_some_and(|mount| mount.player.lock().is_muted())
	}

	/// The last state reported by the player.
	pub fn state(&self) -> PlaybackState {
		self.shared.state.lock().clone()
	}

	pub fn overlay(&self) -> Option<Overlay> {
		Overlay::resolve(&self.state(), self.is_mounted(), &self.config)
	}

	/// Recompute the placement now, for hosts that track resizes on their own.
	pub fn relayout(&self) {
		if let Some(mount) = self.current() {
			mount.relayout();
		}
	}

	/// Release the player, the resize listener and any pending autoplay, and forget the player's last state.
	///
	/// Safe to call repeatedly, or without ever mounting.
	pub fn teardown(&mut self) {
		let Some(mounted) = self.mounted.take() else {
			return;
		};

		mounted.mount.alive.store(false, Ordering::Release);

		// The state belonged to the player that was just dropped.
		*self.shared.state.lock() = PlaybackState::default();

		tracing::debug!("unmounted");
	}

	fn current(&self) -> Option<&Arc<Mount>> {
		self.mounted.as_ref().map(|mounted| &mounted.mount)
	}
}

impl Drop for Frame {
	fn drop(&mut self) {
		self.teardown();
	}
}

fn start(config: &PlayerConfig, authorizer: Option<&Arc<dyn Authorize>>, mount: Option<&Arc<Mount>>) -> Result<(), Error> {
	let stream_name = config
		.stream_name()
		.ok_or_else(|| Error::InvalidArgument("stream name is required".to_string()))?;

	let Some(authorizer) = authorizer else {
		match mount {
			Some(mount) => mount.connect(stream_name, None),
			None => tracing::debug!(stream = %stream_name, "not mounted, ignoring play"),
		}
		return Ok(());
	};

	let required = |value: &Option<String>, what: &str| {
		value
			.clone()
			.filter(|v| !v.is_empty())
			.ok_or_else(|| Error::InvalidArgument(format!("{what} is required for authorized playback")))
	};

	let request = AuthRequest {
		stream_name: stream_name.to_string(),
		user_id: required(&config.auth.user_id, "user id")?,
		app_name: required(&config.auth.app_name, "app name")?,
	};

	let Some(mount) = mount else {
		tracing::debug!(stream = %stream_name, "not mounted, ignoring play");
		return Ok(());
	};

	// The request isn't cancelled on teardown, but its result is dropped unless the same mount is still alive.
	let mount = Arc::downgrade(mount);
	let stream_name = request.stream_name.clone();
	let pending = authorizer.authorize(request);

	tokio::spawn(async move {
		let payload = match pending.await {
			Ok(payload) => payload,
			Err(err) => {
				tracing::warn!(%err, stream = %stream_name, "authorization failed, abandoning playback");
				return;
			}
		};

		match mount.upgrade() {
			Some(mount) => mount.connect(&stream_name, Some(payload)),
			None => tracing::debug!(stream = %stream_name, "unmounted during authorization"),
		}
	});

	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::layout::{Axis, Placement, Size};
	use crate::{AuthError, PlaybackError};
	use futures::FutureExt;
	use futures::future::BoxFuture;
	use std::sync::atomic::AtomicUsize;
	use std::time::Duration;

	#[derive(Default)]
	struct Calls {
		connects: Vec<(String, Option<AuthPayload>)>,
		stops: usize,
		muted: Vec<bool>,
	}

	struct FakePlayer {
		calls: Arc<Mutex<Calls>>,
	}

	impl Player for FakePlayer {
		fn connect(&mut self, stream_name: &str, auth: Option<AuthPayload>) {
			self.calls.lock().connects.push((stream_name.to_string(), auth));
		}

		fn stop(&mut self) {
			self.calls.lock().stops += 1;
		}

		fn is_playing(&self) -> bool {
			!self.calls.lock().connects.is_empty()
		}

		fn is_muted(&self) -> bool {
			self.calls.lock().muted.last().copied().unwrap_or(false)
		}

		fn set_muted(&mut self, muted: bool) {
			self.calls.lock().muted.push(muted);
		}
	}

	#[derive(Default)]
	struct FakeBackend {
		calls: Arc<Mutex<Calls>>,
		created: AtomicUsize,
		on_state: Mutex<Option<OnState>>,
	}

	impl FakeBackend {
		fn created(&self) -> usize {
			self.created.load(Ordering::Relaxed)
		}

		fn connects(&self) -> Vec<(String, Option<AuthPayload>)> {
			self.calls.lock().connects.clone()
		}

		fn push(&self, state: PlaybackState) {
			let on_state = self.on_state.lock().clone().expect("no player created");
			on_state.call(state);
		}
	}

	impl Backend for FakeBackend {
		fn create(&self, _config: &PlayerConfig, _surface: Arc<dyn Surface>, on_state: OnState) -> Box<dyn Player> {
			self.created.fetch_add(1, Ordering::Relaxed);
			*self.on_state.lock() = Some(on_state);

			Box::new(FakePlayer {
				calls: self.calls.clone(),
			})
		}
	}

	#[derive(Default)]
	struct FakeSurface {
		video: Mutex<Option<Size>>,
		container: Mutex<Option<Size>>,
		placements: Mutex<Vec<Placement>>,
	}

	impl FakeSurface {
		fn new(video: Option<Size>, container: Size) -> Arc<Self> {
			Arc::new(Self {
				video: Mutex::new(video),
				container: Mutex::new(Some(container)),
				placements: Default::default(),
			})
		}

		fn placements(&self) -> Vec<Placement> {
			self.placements.lock().clone()
		}
	}

	impl Surface for FakeSurface {
		fn video_size(&self) -> Option<Size> {
			*self.video.lock()
		}

		fn container_size(&self) -> Option<Size> {
			*self.container.lock()
		}

		fn place(&self, placement: &Placement) {
			self.placements.lock().push(*placement);
		}
	}

	struct FakeAuth {
		result: Result<AuthPayload, AuthError>,
		delay: Duration,
		requests: Mutex<Vec<AuthRequest>>,
	}

	impl FakeAuth {
		fn new(result: Result<AuthPayload, AuthError>) -> Arc<Self> {
			Arc::new(Self {
				result,
				delay: Duration::from_millis(100),
				requests: Default::default(),
			})
		}
	}

	impl Authorize for FakeAuth {
		fn authorize(&self, request: AuthRequest) -> BoxFuture<'static, Result<AuthPayload, AuthError>> {
			self.requests.lock().push(request);

			let result = self.result.clone();
			let delay = self.delay;
			async move {
				tokio::time::sleep(delay).await;
				result
			}
			.boxed()
		}
	}

	fn config() -> PlayerConfig {
		PlayerConfig::default().with_stream_name("lobby").with_auto_play(false)
	}

	fn authorized_config() -> PlayerConfig {
		let mut config = config();
		config.auth.user_id = Some("u-1".to_string());
		config.auth.app_name = Some("live".to_string());
		config
	}

	fn hd() -> Size {
		Size::new(1920.0, 1080.0)
	}

	// Long enough for every spawned task to finish with the clock paused.
	async fn settle() {
		tokio::time::sleep(Duration::from_secs(60)).await;
	}

	#[test]
	fn mount_without_surface() {
		let mut frame = Frame::new(config()).unwrap();
		let backend = FakeBackend::default();
		let resize = ResizeSignal::new();

		assert!(!frame.mount(None, &backend, &resize));
		assert!(!frame.is_mounted());
		assert_eq!(backend.created(), 0);
		assert!(resize.is_empty());

		// Retrying once the surface exists works.
		let surface = FakeSurface::new(None, Size::new(800.0, 450.0));
		assert!(frame.mount(Some(surface), &backend, &resize));
		assert_eq!(backend.created(), 1);
	}

	#[test]
	fn mount_once() {
		let mut frame = Frame::new(config()).unwrap();
		let backend = FakeBackend::default();
		let resize = ResizeSignal::new();
		let surface = FakeSurface::new(None, Size::new(800.0, 450.0));

		assert!(frame.mount(Some(surface.clone()), &backend, &resize));
		assert!(!frame.mount(Some(surface.clone()), &backend, &resize));
		assert_eq!(backend.created(), 1);
		assert_eq!(resize.len(), 1);

		frame.teardown();
		assert!(resize.is_empty());
		frame.teardown();
		assert!(resize.is_empty());

		assert!(frame.mount(Some(surface), &backend, &resize));
		assert_eq!(backend.created(), 2);
		assert_eq!(resize.len(), 1);

		drop(frame);
		assert!(resize.is_empty());
	}

	#[test]
	fn teardown_without_mount() {
		let mut frame = Frame::new(config()).unwrap();
		frame.teardown();
		frame.stop();
		frame.unmute();
		frame.relayout();
		assert!(!frame.is_playing());
		assert_eq!(frame.overlay(), None);
	}

	#[test]
	fn layout_on_mount_and_resize() {
		let mut frame = Frame::new(config()).unwrap();
		let backend = FakeBackend::default();
		let resize = ResizeSignal::new();
		let surface = FakeSurface::new(Some(hd()), Size::new(400.0, 400.0));

		frame.mount(Some(surface.clone()), &backend, &resize);

		let placements = surface.placements();
		assert_eq!(placements.len(), 1);
		assert_eq!(placements[0].dominant, Axis::Width);
		assert_eq!(placements[0].top, 87.5);

		*surface.container.lock() = Some(Size::new(800.0, 450.0));
		resize.notify();

		let placements = surface.placements();
		assert_eq!(placements.len(), 2);
		assert_eq!(placements[1].dominant, Axis::Height);
		assert!((placements[1].width - 800.0).abs() < 1e-9);

		// A collapsed container leaves the last placement alone.
		*surface.container.lock() = Some(Size::new(0.0, 450.0));
		resize.notify();
		assert_eq!(surface.placements().len(), 2);

		frame.teardown();
		*surface.container.lock() = Some(Size::new(400.0, 400.0));
		resize.notify();
		assert_eq!(surface.placements().len(), 2);
	}

	#[test]
	fn layout_waits_for_video() {
		let mut frame = Frame::new(config()).unwrap();
		let backend = FakeBackend::default();
		let resize = ResizeSignal::new();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		frame.mount(Some(surface.clone()), &backend, &resize);
		resize.notify();
		assert!(surface.placements().is_empty());

		// The player reports progress once the video size is known.
		*surface.video.lock() = Some(hd());
		backend.push(PlaybackState {
			is_playing: true,
			..Default::default()
		});

		assert_eq!(surface.placements().len(), 1);
	}

	#[test]
	fn rotated_layout() {
		let config = config().with_layout(Sizing::Contain, Rotate::Ccw);
		let mut frame = Frame::new(config).unwrap();
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(Some(hd()), Size::new(450.0, 800.0));

		frame.mount(Some(surface.clone()), &backend, &ResizeSignal::new());

		let placement = surface.placements()[0];
		assert_eq!(placement.rotate, Rotate::Ccw);
		assert_eq!(placement.top, 175.0);
		assert!(placement.left < 0.0);
	}

	#[test]
	fn state_changes() {
		let mut frame = Frame::new(config()).unwrap();
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(Some(hd()), Size::new(400.0, 400.0));

		let seen = Arc::new(Mutex::new(Vec::new()));
		{
			let seen = seen.clone();
			frame.on_state_changed(move |state| seen.lock().push(state.clone()));
		}

		frame.mount(Some(surface.clone()), &backend, &ResizeSignal::new());
		assert_eq!(frame.state(), PlaybackState::default());
		assert!(!frame.state().is_playing);

		let playing = PlaybackState {
			is_muted: Some(true),
			is_playing: true,
			error: None,
		};
		backend.push(playing.clone());
		backend.push(playing.clone());

		assert_eq!(frame.state(), playing);
		assert_eq!(seen.lock().len(), 2);
		assert_eq!(surface.placements().len(), 3);
		assert_eq!(frame.overlay(), Some(Overlay::Unmute { button: true }));

		backend.calls.lock().muted.push(true);
		assert!(frame.is_muted());
		frame.unmute();
		assert!(!frame.is_muted());
		assert_eq!(backend.calls.lock().muted, vec![true, false]);

		let failed = PlaybackState {
			is_muted: Some(false),
			is_playing: false,
			error: Some(PlaybackError::new("connection lost")),
		};
		backend.push(failed.clone());
		assert_eq!(frame.state(), failed);
		assert!(matches!(frame.overlay(), Some(Overlay::Error { details: true, .. })));

		// Late callbacks from a torn down player are ignored.
		frame.teardown();
		assert_eq!(frame.state(), PlaybackState::default());
		assert_eq!(frame.overlay(), None);

		backend.push(failed);
		assert_eq!(frame.state(), PlaybackState::default());
		assert_eq!(seen.lock().len(), 3);
		assert_eq!(surface.placements().len(), 4);
	}

	#[test]
	fn disable_audio() {
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		let mut frame = Frame::new(config()).unwrap();
		frame.mount(Some(surface.clone()), &backend, &ResizeSignal::new());
		assert!(backend.calls.lock().muted.is_empty());
		assert!(!frame.is_muted());
		frame.teardown();

		let mut config = config();
		config.disable_audio = Some(true);
		let mut frame = Frame::new(config).unwrap();
		frame.mount(Some(surface), &backend, &ResizeSignal::new());
		assert_eq!(backend.calls.lock().muted, vec![true]);
		assert!(frame.is_muted());
	}

	#[test]
	fn remount_starts_fresh() {
		let mut frame = Frame::new(config()).unwrap();
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(Some(hd()), Size::new(400.0, 400.0));

		frame.mount(Some(surface.clone()), &backend, &ResizeSignal::new());
		backend.push(PlaybackState {
			is_muted: Some(true),
			is_playing: true,
			error: Some(PlaybackError::new("ice failed")),
		});
		assert!(matches!(frame.overlay(), Some(Overlay::Error { .. })));

		frame.teardown();
		assert!(frame.mount(Some(surface), &backend, &ResizeSignal::new()));

		// Nothing reported by the new player yet.
		assert_eq!(frame.state(), PlaybackState::default());
		assert!(!frame.state().is_playing);
		assert_eq!(frame.overlay(), None);

		backend.push(PlaybackState {
			is_playing: true,
			..Default::default()
		});
		assert!(frame.state().is_playing);
	}

	#[test]
	fn play_requires_stream_name() {
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		for config in [PlayerConfig::default(), PlayerConfig::default().with_stream_name("")] {
			let mut frame = Frame::new(config.with_auto_play(false)).unwrap();
			frame.mount(Some(surface.clone()), &backend, &ResizeSignal::new());

			assert!(matches!(frame.play(), Err(Error::InvalidArgument(_))));
		}

		assert!(backend.connects().is_empty());
	}

	#[test]
	fn play_direct() {
		let mut frame = Frame::new(config()).unwrap();
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		// Not mounted yet, nothing to connect.
		frame.play().unwrap();
		assert!(!frame.is_playing());

		frame.mount(Some(surface), &backend, &ResizeSignal::new());
		frame.play().unwrap();
		assert_eq!(backend.connects(), vec![("lobby".to_string(), None)]);
		assert!(frame.is_playing());

		frame.retry().unwrap();
		assert_eq!(backend.connects().len(), 2);

		frame.stop();
		assert_eq!(backend.calls.lock().stops, 1);
	}

	#[tokio::test(start_paused = true)]
	async fn autoplay() {
		let mut frame = Frame::new(config().with_auto_play(true)).unwrap();
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		frame.mount(Some(surface), &backend, &ResizeSignal::new());

		tokio::time::sleep(Duration::from_millis(2900)).await;
		assert!(backend.connects().is_empty());

		tokio::time::sleep(Duration::from_millis(200)).await;
		assert_eq!(backend.connects(), vec![("lobby".to_string(), None)]);
	}

	#[tokio::test(start_paused = true)]
	async fn autoplay_cancelled_on_teardown() {
		let mut frame = Frame::new(config().with_auto_play(true)).unwrap();
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		frame.mount(Some(surface), &backend, &ResizeSignal::new());
		tokio::time::sleep(Duration::from_secs(1)).await;
		frame.teardown();

		settle().await;
		assert!(backend.connects().is_empty());
	}

	#[tokio::test(start_paused = true)]
	async fn play_authorized() {
		let auth = FakeAuth::new(Ok(AuthPayload::live("secret")));
		let mut frame = Frame::new(authorized_config()).unwrap().with_authorizer(auth.clone());
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		frame.mount(Some(surface), &backend, &ResizeSignal::new());
		frame.play().unwrap();

		// Nothing connects until the token arrives.
		assert!(backend.connects().is_empty());
		settle().await;

		assert_eq!(
			auth.requests.lock().clone(),
			vec![AuthRequest {
				stream_name: "lobby".to_string(),
				user_id: "u-1".to_string(),
				app_name: "live".to_string(),
			}]
		);
		assert_eq!(
			backend.connects(),
			vec![("lobby".to_string(), Some(AuthPayload::live("secret")))]
		);
	}

	#[tokio::test(start_paused = true)]
	async fn play_authorized_rejected() {
		let auth = FakeAuth::new(Err(AuthError::Malformed("missing data.hash".to_string())));
		let mut frame = Frame::new(authorized_config()).unwrap().with_authorizer(auth.clone());
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		frame.mount(Some(surface), &backend, &ResizeSignal::new());
		assert!(frame.play().is_ok());

		settle().await;
		assert_eq!(auth.requests.lock().len(), 1);
		assert!(backend.connects().is_empty());
	}

	#[tokio::test(start_paused = true)]
	async fn play_authorized_requires_identity() {
		let auth = FakeAuth::new(Ok(AuthPayload::live("secret")));
		let mut frame = Frame::new(config()).unwrap().with_authorizer(auth.clone());
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		frame.mount(Some(surface), &backend, &ResizeSignal::new());
		assert!(matches!(frame.play(), Err(Error::InvalidArgument(_))));

		settle().await;
		assert!(auth.requests.lock().is_empty());
		assert!(backend.connects().is_empty());
	}

	#[tokio::test(start_paused = true)]
	async fn teardown_during_authorization() {
		let auth = FakeAuth::new(Ok(AuthPayload::live("secret")));
		let mut frame = Frame::new(authorized_config()).unwrap().with_authorizer(auth.clone());
		let backend = FakeBackend::default();
		let surface = FakeSurface::new(None, Size::new(400.0, 400.0));

		frame.mount(Some(surface.clone()), &backend, &ResizeSignal::new());
		frame.play().unwrap();
		frame.teardown();

		// Remounting doesn't revive the stale request.
		frame.mount(Some(surface), &backend, &ResizeSignal::new());

		settle().await;
		assert_eq!(auth.requests.lock().len(), 1);
		assert!(backend.connects().is_empty());
	}

	#[test]
	fn invalid_auth_url() {
		let mut config = config();
		config.auth.url = Some("data:text/plain,hello".parse().unwrap());

		assert!(matches!(Frame::new(config), Err(Error::InvalidArgument(_))));
	}
}
