mod format_tests;

use model::AirQuality;

pub(crate) fn good_readings() -> AirQuality {
    AirQuality::from_fields([
        "50", "Good", "10", "Good", "20", "Good", "5", "Good", "15", "Good",
    ])
}

pub(crate) const LA_ROW: &str = "USA,LA,50,Good,10,Good,20,Good,5,Good,15,Good";
