//! The render loop: run one mutator, then rebuild and remount the whole view.
//!
//! Every operation holds a single async lock from its first request until its
//! render is mounted, so overlapping interactions apply in the order they were
//! issued and each mount reflects every mutation before it.

use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::api::PartyApi;
use crate::error::ApiError;
use crate::state::State;
use crate::store::Store;
use crate::view::{self, Action, Field, Node, PartyDraft};

static CREATE_FALLBACK: &str = "Failed to add party.";
static DELETE_FALLBACK: &str = "Failed to delete party.";

/// Where the view is mounted and how the user is told about failed writes.
pub trait Host: Send + Sync {
    /// Replace the container's content with `tree`.
    fn mount(&self, tree: Node);

    /// Blocking notification.
    fn alert(&self, message: &str);
}

struct Session<A> {
    store: Store<A>,
    draft: PartyDraft,
}

pub struct App<A, H> {
    session: Mutex<Session<A>>,
    host: H,
}

impl<A: PartyApi, H: Host> App<A, H> {
    pub fn new(api: A, host: H) -> Self {
        App {
            session: Mutex::new(Session {
                store: Store::new(api),
                draft: PartyDraft::default(),
            }),
            host,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Load parties, RSVPs and guests, then render for the first time.
    pub async fn start(&self) {
        let mut session = self.session.lock().await;
        session.store.prime().await;
        self.mount(&session);
    }

    /// Record input into the creation form. Does not render.
    pub async fn set_field(&self, field: Field, value: impl Into<String>) {
        self.session.lock().await.draft.set(field, value);
    }

    pub async fn draft(&self) -> PartyDraft {
        self.session.lock().await.draft.clone()
    }

    /// Read the current state without mutating it.
    pub async fn with_state<R>(&self, f: impl FnOnce(&State) -> R) -> R {
        f(self.session.lock().await.store.state())
    }

    /// Run the operation behind a UI handler, then render.
    pub async fn dispatch(&self, action: Action) {
        let mut session = self.session.lock().await;
        debug!(?action, "dispatch");

        match action {
            Action::SelectParty(id) => session.store.load_party(id).await,
            Action::DeleteParty(id) => {
                if let Err(e) = session.store.delete_party(id).await {
                    self.notify(&e, DELETE_FALLBACK);
                }
            }
            Action::SubmitParty => {
                let result = match session.draft.to_new_party() {
                    Ok(party) => session.store.create_party(party).await,
                    Err(e) => {
                        error!(error = %e, "party form not submitted");
                        Err(e)
                    }
                };
                if let Err(e) = result {
                    self.notify(&e, CREATE_FALLBACK);
                }
                // cleared whether or not the create went through
                session.draft.clear();
            }
        }

        self.mount(&session);
    }

    fn mount(&self, session: &Session<A>) {
        self.host
            .mount(view::build(session.store.state(), &session.draft));
    }

    fn notify(&self, error: &ApiError, fallback: &str) {
        if let Some(message) = error.user_message(fallback) {
            self.host.alert(&message);
        }
    }
}
