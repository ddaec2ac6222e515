/// Every screen the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    // Onboarding
    Splash,
    Welcome,
    Preferences,
    // Main
    Home,
    Map,
    Scan,
    Plan,
    Tickets,
    Profile,
}

pub const ONBOARDING_ROUTES: [Route; 3] = [Route::Splash, Route::Welcome, Route::Preferences];

/// Main routes in tab order.
pub const MAIN_ROUTES: [Route; 6] = [
    Route::Home,
    Route::Map,
    Route::Scan,
    Route::Plan,
    Route::Tickets,
    Route::Profile,
];

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Route::Splash => "Splash",
            Route::Welcome => "Welcome",
            Route::Preferences => "Preferences",
            Route::Home => "Home",
            Route::Map => "Map",
            Route::Scan => "Scan",
            Route::Plan => "Plan",
            Route::Tickets => "Tickets",
            Route::Profile => "Profile",
        }
    }

    pub fn is_onboarding(self) -> bool {
        ONBOARDING_ROUTES.contains(&self)
    }

    /// Where the app lands when the route set switches.
    pub fn landing(onboarded: bool) -> Route {
        if onboarded {
            Route::Home
        } else {
            Route::Welcome
        }
    }

    /// Neighbouring main route, wrapping. Onboarding routes stay put.
    pub fn cycle_main(self, forward: bool) -> Route {
        let Some(index) = MAIN_ROUTES.iter().position(|r| *r == self) else {
            return self;
        };
        let len = MAIN_ROUTES.len();
        let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
        MAIN_ROUTES[next]
    }
}

/// Routes that may render for the given onboarding flag.
pub fn routes_for(onboarded: bool) -> &'static [Route] {
    if onboarded {
        &MAIN_ROUTES
    } else {
        &ONBOARDING_ROUTES
    }
}

/// `route` if it may render now, otherwise the landing route of the active set.
pub fn gate(route: Route, onboarded: bool) -> Route {
    if routes_for(onboarded).contains(&route) {
        route
    } else {
        Route::landing(onboarded)
    }
}
