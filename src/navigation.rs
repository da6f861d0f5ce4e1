/// The landing route, where logout sends the user.
pub const ROOT_PATH: &str = "/";

/// Client-side navigation, implemented by the router in the browser.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path)
    }
}
