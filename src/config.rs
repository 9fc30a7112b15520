use std::env;

#[derive(Debug)]
pub struct Config {
    pub telegram_token: String,
    pub database_url: String,
    pub sentry_url: Option<String>,
}

fn read_from_env(name: &str) -> String {
    let value = env::var(name);
    if value.is_err() {
        panic!("Can't read {} from env", name);
    }
    value.unwrap()
}

impl Config {
    pub fn init() -> Self {
        let telegram_token = read_from_env("TELEGRAM_TOKEN");
        let database_url = read_from_env("DATABASE_URL");
        let sentry_url = env::var("SENTRY_URL").ok();

        Config {
            telegram_token,
            database_url,
            sentry_url,
        }
    }
}
