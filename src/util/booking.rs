//! "Book Now" navigation shared by every page.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

pub trait Navigator {
    /// Full-page navigation to `href`.
    fn navigate(&self, href: &str);
}

/// Navigate to the booking route.
pub fn open_booking(nav: &impl Navigator, booking_path: &str) {
    log::debug!("opening booking at {booking_path}");
    nav.navigate(booking_path);
}
