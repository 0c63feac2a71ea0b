#[derive(Debug)]
pub struct Config {
    pub route_path: String,
    pub station_path: String,
    pub translation_path: String,
    pub color_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            route_path: "route.json".into(),
            station_path: "station.json".into(),
            translation_path: "trans_name.json".into(),
            color_path: "color.json".into(),
        }
    }
}
