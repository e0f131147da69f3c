use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::auth::session::Role;

const MAX_ATTEMPTS: usize = 5;
const WINDOW_SECS: u64 = 900; // 15 minutes

/// Failed-login bookkeeping per client address and login form.
/// The backend stays the authority on credentials; this only stops hammering it.
#[derive(Clone)]
pub struct LoginThrottle {
    attempts: Arc<Mutex<HashMap<(IpAddr, Role), Vec<Instant>>>>,
    window: Duration,
}

impl Default for LoginThrottle {
    fn default() -> Self {
        Self::with_window(Duration::from_secs(WINDOW_SECS))
    }
}

impl LoginThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_window(window: Duration) -> Self {
        Self { attempts: Arc::default(), window }
    }

    /// True once the address has used up its attempts for this form.
    pub fn is_blocked(&self, ip: IpAddr, role: Role) -> bool {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        self.prune(&mut map);
        map.get(&(ip, role)).is_some_and(|t| t.len() >= MAX_ATTEMPTS)
    }

    pub fn record_failure(&self, ip: IpAddr, role: Role) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        self.prune(&mut map);
        map.entry((ip, role)).or_default().push(Instant::now());
    }

    pub fn clear(&self, ip: IpAddr, role: Role) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(&(ip, role));
    }

    /// Drop expired attempts for every client, and clients left with none.
    fn prune(&self, map: &mut HashMap<(IpAddr, Role), Vec<Instant>>) {
        let Some(cutoff) = Instant::now().checked_sub(self.window) else {
            return;
        };
        map.retain(|_, timestamps| {
            timestamps.retain(|t| *t > cutoff);
            !timestamps.is_empty()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const IP: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7));

    #[test]
    fn blocks_after_five_failures() {
        let throttle = LoginThrottle::new();
        for _ in 0..4 {
            throttle.record_failure(IP, Role::Admin);
        }
        assert!(!throttle.is_blocked(IP, Role::Admin));
        throttle.record_failure(IP, Role::Admin);
        assert!(throttle.is_blocked(IP, Role::Admin));
    }

    #[test]
    fn forms_are_counted_separately() {
        let throttle = LoginThrottle::new();
        for _ in 0..MAX_ATTEMPTS {
            throttle.record_failure(IP, Role::Doctor);
        }
        assert!(throttle.is_blocked(IP, Role::Doctor));
        assert!(!throttle.is_blocked(IP, Role::Admin));
    }

    #[test]
    fn success_clears_history() {
        let throttle = LoginThrottle::new();
        for _ in 0..MAX_ATTEMPTS {
            throttle.record_failure(IP, Role::LoggedPatient);
        }
        throttle.clear(IP, Role::LoggedPatient);
        assert!(!throttle.is_blocked(IP, Role::LoggedPatient));
    }

    #[test]
    fn clients_that_never_return_are_forgotten() {
        let throttle = LoginThrottle::with_window(Duration::from_millis(20));
        let other = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 8));
        throttle.record_failure(IP, Role::Admin);
        std::thread::sleep(Duration::from_millis(40));

        throttle.record_failure(other, Role::Admin);
        let map = throttle.attempts.lock().unwrap();
        assert!(!map.contains_key(&(IP, Role::Admin)));
        assert_eq!(map.len(), 1);
    }
}
