/// Command parsing and dispatch for the interactive shell.
///
/// A [`Shell`] owns the service and the login state. [`Shell::execute`] takes
/// one input line and returns the text to print, so the loop in `main` stays
/// a thin stdin/stdout wrapper.
use model::{AirQuality, AqiCategory, Pollutant, AQI_FIELD_COUNT};
use serde::Serialize;
use store::{AirQualityService, Credentials, StoreError};
use tracing::debug;

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Exit,
}

pub struct Shell {
    service: AirQualityService,
    credentials: Credentials,
    authenticated: bool,
}

impl Shell {
    pub fn new(service: AirQualityService, credentials: Credentials) -> Self {
        Self {
            service,
            credentials,
            authenticated: false,
        }
    }

    /// Runs one input line. Blank lines print nothing.
    pub fn execute(&mut self, line: &str) -> Reply {
        let args = match tokenize(line) {
            Ok(args) => args,
            Err(msg) => return Reply::Print(usage_error(msg)),
        };
        let Some((cmd, rest)) = args.split_first() else {
            return Reply::Print(String::new());
        };
        let cmd = cmd.to_uppercase();
        debug!(command = %cmd, args = rest.len(), "shell command");

        match cmd.as_str() {
            "EXIT" | "QUIT" => return Reply::Exit,
            "AUTH" => return Reply::Print(self.auth(rest)),
            _ => {}
        }
        if !self.authenticated {
            return Reply::Print("ERR 401 not authenticated (use AUTH user pass)".to_string());
        }

        let out = match cmd.as_str() {
            "GET" => match rest {
                [country, city] => render(self.service.air_quality(country, city)),
                _ => usage_error("GET country city"),
            },
            "CREATE" => match split_record(rest) {
                Some((country, city, aq)) => render(self.service.create(country, city, aq)),
                None => usage_error("CREATE country city <10 AQI fields>"),
            },
            "UPDATE" => match split_record(rest) {
                Some((country, city, aq)) => render(self.service.update(country, city, aq)),
                None => usage_error("UPDATE country city <10 AQI fields>"),
            },
            "DELETE" => match rest {
                [country, city] => render(self.service.delete(country, city)),
                _ => usage_error("DELETE country city"),
            },
            "COUNTRIES" => render(self.service.country_names()),
            "CITIES" => render(self.service.city_names()),
            "RECORDS" => render(self.service.all_records()),
            "CO-HEALTHY" => render(self.service.co_healthy_cities()),
            "CO-UNHEALTHY" => render(self.service.co_unhealthy_cities()),
            "CATEGORY" => match rest {
                [pollutant, cats] => match (Pollutant::parse(pollutant), parse_categories(cats)) {
                    (Some(p), Some(cats)) => render(self.service.cities_with_category(p, &cats)),
                    (None, _) => usage_error(format!("unknown pollutant {pollutant:?}")),
                    (_, None) => usage_error(format!("unknown category in {cats:?}")),
                },
                _ => usage_error("CATEGORY pollutant cat[|cat...]"),
            },
            "RANGE" => match rest {
                [pollutant, start, end] => match Pollutant::parse(pollutant) {
                    Some(p) => render(self.service.cities_in_value_range(p, start, end)),
                    None => usage_error(format!("unknown pollutant {pollutant:?}")),
                },
                _ => usage_error("RANGE pollutant start end"),
            },
            "STATS" => render(self.service.stats()),
            other => format!("ERR 400 unknown command: {other}"),
        };
        Reply::Print(out)
    }

    fn auth(&mut self, args: &[String]) -> String {
        let ok = match args {
            [user, pass] => self.credentials.verify(user, pass),
            [header] => self.credentials.verify_basic(header),
            _ => return usage_error("AUTH user pass"),
        };
        self.authenticated = ok;
        if ok {
            "OK".to_string()
        } else {
            "ERR 401 invalid credentials".to_string()
        }
    }
}

fn render<T: Serialize>(result: Result<T, StoreError>) -> String {
    match result {
        Ok(value) => match serde_json::to_string(&value) {
            Ok(json) => json,
            Err(e) => format!("ERR 500 encode failed: {e}"),
        },
        Err(e) => format!("ERR {} {}", e.status_code(), e),
    }
}

fn usage_error(msg: impl std::fmt::Display) -> String {
    format!("ERR 400 usage: {msg}")
}

/// `country city f1 .. f10` → parts, or `None` on a wrong argument count.
fn split_record(args: &[String]) -> Option<(&str, &str, AirQuality)> {
    let [country, city, fields @ ..] = args else {
        return None;
    };
    let fields: [String; AQI_FIELD_COUNT] = fields.to_vec().try_into().ok()?;
    Some((country.as_str(), city.as_str(), AirQuality::from_fields(fields)))
}

fn parse_categories(s: &str) -> Option<Vec<AqiCategory>> {
    s.split('|').map(|c| AqiCategory::parse(c.trim())).collect()
}

/// Splits on whitespace; double quotes group text containing spaces.
pub fn tokenize(line: &str) -> Result<Vec<String>, &'static str> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    out.push(std::mem::take(&mut cur));
                    has_token = false;
                }
            }
            c => {
                cur.push(c);
                has_token = true;
            }
        }
    }
    if in_quotes {
        return Err("unterminated quote");
    }
    if has_token {
        out.push(cur);
    }
    Ok(out)
}
