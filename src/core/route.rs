//! Routes of the site and the query flags they understand.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Impressum,
    Datenschutz,
    Terms,
    Kontakt,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Impressum,
        Route::Datenschutz,
        Route::Terms,
        Route::Kontakt,
    ];

    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/index.html" => Route::Home,
            "/impressum" => Route::Impressum,
            "/datenschutz" => Route::Datenschutz,
            "/terms" => Route::Terms,
            "/kontakt" => Route::Kontakt,
            _ => Route::NotFound,
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Impressum => "/impressum",
            Route::Datenschutz => "/datenschutz",
            Route::Terms => "/terms",
            Route::Kontakt => "/kontakt",
            Route::NotFound => "/404",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Route::Home => "Interim Management",
            Route::Impressum => "Impressum",
            Route::Datenschutz => "Datenschutzerklärung",
            Route::Terms => "AGB & Nutzungsbedingungen",
            Route::Kontakt => "Kontakt",
            Route::NotFound => "Seite nicht gefunden",
        }
    }

    /// Only the home page mounts scroll tracks.
    #[inline]
    pub fn animates(self) -> bool {
        self == Route::Home
    }
}

pub const VCARD_PARAM: &str = "vcard";

fn params(search: &str) -> impl Iterator<Item = (&str, &str)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| p.split_once('=').unwrap_or((p, "")))
}

/// True when the query string carries `vcard=true`.
pub fn wants_vcard(search: &str) -> bool {
    params(search).any(|(k, v)| k == VCARD_PARAM && v.eq_ignore_ascii_case("true"))
}

/// Query string without the `vcard` parameter; empty or `?...`.
pub fn strip_vcard_param(search: &str) -> String {
    let kept: Vec<String> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
        .filter(|p| p.split('=').next() != Some(VCARD_PARAM))
        .map(str::to_owned)
        .collect();
    if kept.is_empty() {
        String::new()
    } else {
        format!("?{}", kept.join("&"))
    }
}
