pub const START_GREETING: &str = "Hi! Please share your location to request a ride:";
pub const DRIVER_GREETING: &str = "New customer request! Please share your location:";
pub const LOCATION_PROMPT: &str = "Tap the button below to share your current location:";
pub const LOCATION_ACKNOWLEDGMENT: &str = "Thanks! Your location has been received.";

pub const WEB_APP_BUTTON_LABEL: &str = "📍 Share Location";
pub const LOCATION_BUTTON_LABEL: &str = "📍 Send current location";

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 40.0;
pub const MIN_ETA_MINUTES: u32 = 1;
