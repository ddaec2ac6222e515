use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::KeyEvent;

use super::event::Event;
use super::keys::{map_key, Action};
use super::notifications::{self, Notification, NotificationKind};
use super::routes::{gate, Route};
use super::scheduler::ScheduledTask;
use super::screens::map::MapState;
use super::screens::onboarding::{self, OnboardingState};
use super::screens::plan::{self, PlanBuilder};
use super::screens::profile::{self, ProfileState};
use super::screens::scan::{self, Scanner};
use super::screens::tickets::{self, TicketCart};
use super::screens::{map, Outcome};
use crate::config::Config;
use crate::error::ZooResult;
use crate::logging::{log_debug, log_error, log_info};
use crate::models::fixtures::animal_name;
use crate::store::{Store, StoreEffect, StoreScope};

/// The interactive session: the provisioned store plus each screen's local state.
pub struct ZooApp {
    scope: StoreScope,
    pub config: Config,
    pub route: Route,
    pub onboarding: OnboardingState,
    pub map: MapState,
    pub scanner: Scanner,
    pub planner: PlanBuilder,
    pub tickets: TicketCart,
    pub profile: ProfileState,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
    splash_timer: Option<ScheduledTask>,
}

impl ZooApp {
    /// Provision a fresh store for this session.
    pub fn new(config: Config) -> ZooResult<Self> {
        let mut scope = StoreScope::new();
        scope.provision(Store::new())?;
        Ok(Self::with_scope(scope, config))
    }

    pub fn with_scope(scope: StoreScope, config: Config) -> Self {
        let mut route = if config.skip_splash { Route::Welcome } else { Route::Splash };
        if !scope.is_provisioned() {
            log_error("Session started without a provisioned store");
        }
        if let Ok(store) = scope.store("session") {
            route = gate(route, store.state().onboarded);
        }

        Self {
            scanner: Scanner::new(config.effective_scan_seed()),
            scope,
            config,
            route,
            onboarding: OnboardingState::default(),
            map: MapState::default(),
            planner: PlanBuilder::default(),
            tickets: TicketCart::default(),
            profile: ProfileState::default(),
            notifications: Vec::new(),
            should_quit: false,
            splash_timer: None,
        }
    }

    pub fn store(&self) -> ZooResult<&Store> {
        self.scope.store(self.route.title())
    }

    /// The route that actually renders under the current onboarding flag.
    pub fn current_route(&self) -> ZooResult<Route> {
        Ok(gate(self.route, self.store()?.state().onboarded))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ZooResult<()> {
        let assistant_open = self.store()?.state().assistant_open;
        let route = self.current_route()?;
        let action = map_key(key, route, assistant_open);
        log_debug(&format!("Key {:?} on {:?} -> {:?}", key.code, route, action));
        self.handle_action(action)
    }

    pub fn handle_action(&mut self, action: Action) -> ZooResult<()> {
        if action == Action::Quit {
            self.should_quit = true;
            return Ok(());
        }

        let route = self.current_route()?;
        let today = Local::now().format("%a %-d %b").to_string();
        let store = self.scope.store_mut(route.title())?;

        let outcome = match action {
            Action::None => Outcome::none(),
            Action::ToggleAssistant => {
                let open = !store.state().assistant_open;
                store.set_assistant_open(open);
                Outcome::none()
            }
            Action::CyclePhase => {
                store.cycle_visit_phase();
                Outcome::none()
            }
            Action::StopAudio => {
                store.set_audio_playing(false, None);
                Outcome::none()
            }
            Action::NextScreen => Outcome::navigate(route.cycle_main(true)),
            Action::PrevScreen => Outcome::navigate(route.cycle_main(false)),
            Action::GoTo(target) => Outcome::navigate(target),
            _ => match route {
                Route::Splash => onboarding::handle_splash(action),
                Route::Welcome => onboarding::handle_welcome(&mut self.onboarding, store, action),
                Route::Preferences => onboarding::handle_preferences(&mut self.onboarding, store, action),
                Route::Home => Outcome::none(),
                Route::Map => map::handle(&mut self.map, store, action),
                Route::Scan => scan::handle(&mut self.scanner, store, action),
                Route::Plan => plan::handle(&mut self.planner, store, action, &today),
                Route::Tickets => tickets::handle(&mut self.tickets, store, action),
                Route::Profile => profile::handle(&mut self.profile, store, action),
            },
        };

        if let Some(notice) = outcome.notice {
            self.notifications.push(notice);
        }
        if let Some(target) = outcome.navigate {
            self.navigate(target);
        }
        self.apply_effects()
    }

    /// React to what the store reported since the last call.
    fn apply_effects(&mut self) -> ZooResult<()> {
        let effects = self.scope.store_mut("session")?.take_effects();

        for effect in effects {
            match effect {
                StoreEffect::RouteSetChanged { onboarded } => {
                    log_info(&format!("Onboarded = {}, switching route set", onboarded));
                    if !onboarded {
                        self.onboarding = OnboardingState::default();
                    }
                    self.navigate(Route::landing(onboarded));
                }
                StoreEffect::VisitPhaseChanged { to, .. } => {
                    self.notify(NotificationKind::Info, format!("Visit phase: {}", to.title()));
                }
                StoreEffect::SavedAnimalToggled { id, saved } => {
                    let name = animal_name(&id);
                    if saved {
                        self.notify(NotificationKind::Success, format!("Saved {}", name));
                    } else {
                        self.notify(NotificationKind::Info, format!("Removed {} from saved", name));
                    }
                }
                StoreEffect::PlanReplaced { present } => {
                    if !present {
                        self.notify(NotificationKind::Info, "Plan cleared");
                    }
                }
            }
        }
        Ok(())
    }

    fn navigate(&mut self, target: Route) {
        let onboarded = self.store().map(|s| s.state().onboarded).unwrap_or(false);
        let target = gate(target, onboarded);
        if target == self.route {
            return;
        }
        log_debug(&format!("Navigate {:?} -> {:?}", self.route, target));

        if self.route == Route::Splash {
            self.cancel_splash_timer();
        }
        if self.route == Route::Scan {
            self.scanner.reset();
        }
        self.route = target;
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification::new(kind, message));
    }

    pub fn on_tick(&mut self) {
        notifications::prune(&mut self.notifications, Instant::now());

        if self.route == Route::Scan {
            if let Some(found) = self.scanner.tick() {
                self.notify(NotificationKind::Success, format!("Identified: {}", found.name));
            }
        }
    }

    /// Schedule the splash auto-advance if the splash is showing and no timer
    /// is armed yet. Needs a tokio runtime.
    pub fn arm_splash_timer(&mut self, sender: mpsc::Sender<Event>) {
        if self.route != Route::Splash || self.splash_timer.is_some() {
            return;
        }
        let delay = Duration::from_millis(self.config.splash_delay_ms);
        self.splash_timer = Some(ScheduledTask::schedule(delay, sender, Event::SplashElapsed));
    }

    pub fn splash_timer_pending(&self) -> bool {
        self.splash_timer.as_ref().map(|t| t.is_pending()).unwrap_or(false)
    }

    fn cancel_splash_timer(&mut self) {
        if let Some(mut timer) = self.splash_timer.take() {
            timer.cancel();
        }
    }

    pub fn on_splash_elapsed(&mut self) {
        if self.route == Route::Splash {
            log_debug("Splash elapsed");
            self.navigate(Route::Welcome);
        }
    }
}
