//! Quiz GUI application.
//!
//! A single-device quiz game built on egui: answer questions, earn coins,
//! and spend them on cosmetic themes in the shop. Accounts, coin balances
//! and theme ownership persist locally; the session itself does not, so
//! every launch starts logged out.
//!
//! The application is built with a modular architecture:
//! - `rquiz` (library) - session, ownership, storage, theme catalog, questions
//! - `app/` - UI state, store wiring and workflow coordination
//! - `state/` - quiz progression and form state
//! - `ui/` - screen rendering and dispatch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;

mod app;
mod state;
mod ui;

use app::{AppState, SessionCoordinator, ThemeCoordinator};
use rquiz::{
    shared_store, DiskStore, KvAccountRepository, KvOwnershipRepository, MemoryStore,
    OwnershipStore, SessionBus, SessionStore, SharedStore,
};
use ui::ScreenManager;

/// Main application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_title("Quiz"),
        ..Default::default()
    };

    eframe::run_native("Quiz", options, Box::new(|_cc| Ok(Box::new(QuizApp::new()))))
}

/// The main quiz application shell.
///
/// Owns the injected services and delegates the actual work:
/// - `SessionCoordinator` handles login/purchase/deletion workflows
/// - `ThemeCoordinator` applies the equipped theme every frame
/// - `ScreenManager` renders the active screen
struct QuizApp {
    /// Centralized UI state
    state: AppState,
    /// Account registry and current session
    session: SessionStore,
    /// Theme ownership, shared with the session bus as a listener
    ownership: Rc<RefCell<OwnershipStore>>,
}

impl QuizApp {
    /// Wires up storage, repositories, stores and the session bus.
    fn new() -> Self {
        let shared: SharedStore = match DiskStore::open_default() {
            Ok(disk) => {
                log::info!("using store file {}", disk.path().display());
                shared_store(disk)
            }
            Err(e) => {
                // Run without persistence rather than refusing to start
                log::error!("disk store unavailable, progress will not persist: {:#}", e);
                shared_store(MemoryStore::new())
            }
        };

        let bus = Rc::new(RefCell::new(SessionBus::new()));
        let ownership = Rc::new(RefCell::new(OwnershipStore::new(Box::new(
            KvOwnershipRepository::new(shared.clone()),
        ))));
        bus.borrow_mut().register(ownership.clone());

        let session = SessionStore::new(
            Box::new(KvAccountRepository::new(shared.clone())),
            Box::new(KvOwnershipRepository::new(shared)),
            bus,
        );

        Self {
            state: AppState::new(),
            session,
            ownership,
        }
    }
}

impl eframe::App for QuizApp {
    /// Called by eframe on shutdown and periodically; makes sure the
    /// ownership record is written even if the user never logs out.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.ownership.borrow_mut().flush();
    }

    /// Main update loop: apply theme, render the active screen, apply
    /// whatever interaction came back.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.ownership.borrow());

        let interaction =
            ScreenManager::render_current(ctx, &mut self.state, &self.session, &self.ownership.borrow());

        if let Some(interaction) = interaction {
            SessionCoordinator::handle_interaction(
                &mut self.state,
                &mut self.session,
                &self.ownership,
                interaction,
            );
        }
    }
}
