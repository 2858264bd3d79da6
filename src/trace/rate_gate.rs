/// Admits samples no more often than once per `min_interval` milliseconds of a monotonic clock.
///
/// The gate only compares timestamps; it never schedules anything.
#[derive(Debug, Clone, Copy)]
pub struct RateGate {
	min_interval: f64,
	last_accepted: Option<f64>,
}

impl RateGate {
	pub fn new(min_interval: f64) -> Self {
		Self {
			min_interval,
			last_accepted: None,
		}
	}

	/// A gate admitting at most `rate` samples per second.
	pub fn per_second(rate: f64) -> Self {
		Self::new(1000.0 / rate)
	}

	pub fn min_interval(&self) -> f64 {
		self.min_interval
	}

	pub fn try_accept(&mut self, now: f64) -> bool {
		let accepted = match self.last_accepted {
			None => true,
			Some(last) => now - last >= self.min_interval,
		};
		if accepted {
			self.last_accepted = Some(now);
		}
		accepted
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_sample_is_accepted() {
		let mut gate = RateGate::per_second(300.0);
		assert!(gate.try_accept(0.0));
	}

	#[test]
	fn accepted_samples_are_spaced() {
		let mut gate = RateGate::per_second(300.0);
		let accepted: Vec<f64> = (0..200)
			.map(|i| i as f64 * 0.7)
			.filter(|&t| gate.try_accept(t))
			.collect();
		assert!(accepted.len() > 1);
		for pair in accepted.windows(2) {
			assert!(pair[1] - pair[0] >= gate.min_interval());
		}
	}

	#[test]
	fn rejected_samples_do_not_move_the_window() {
		let mut gate = RateGate::new(10.0);
		assert!(gate.try_accept(0.0));
		assert!(!gate.try_accept(6.0));
		assert!(!gate.try_accept(9.9));
		assert!(gate.try_accept(10.0));
	}
}
