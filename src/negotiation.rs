//! Content-negotiation dispatch (`spec.md` §6, §3): picks which
//! [`crate::processor::JsonLdProcessor`] operation an `Accept` header's
//! `profile` parameter asks for. Pure dispatch with no I/O of its own —
//! `spec.md` §1 puts the HTTP adapter around it out of scope, so this
//! stops at the decision the adapter would act on.

use iref::Iri;

pub const EXPANDED: &str = "http://www.w3.org/ns/json-ld#expanded";
pub const COMPACTED: &str = "http://www.w3.org/ns/json-ld#compacted";
pub const FLATTENED: &str = "http://www.w3.org/ns/json-ld#flattened";
pub const FRAMED: &str = "http://www.w3.org/ns/json-ld#framed";

/// The operation a `profile` parameter selects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
	Expanded,
	Compacted,
	Flattened,
	Framed,
}

/// No operation could be selected for the given `profile`; the adapter
/// should answer HTTP 406 Not Acceptable.
#[derive(Debug, thiserror::Error)]
#[error("no acceptable profile")]
pub struct NotAcceptable;

/// Selects an operation from a (space-separated, possibly multi-valued)
/// `profile` parameter value.
///
/// `frame_link` is the frame document IRI carried on the response's
/// `Link` header, if any. A `framed` profile without one is not
/// satisfiable (`spec.md` §6). Absent any recognized profile, the
/// default operation is `expanded`.
pub fn select_operation(profile: &str, frame_link: Option<&Iri>) -> Result<Operation, NotAcceptable> {
	let profiles: Vec<&str> = profile.split_whitespace().collect();

	if profiles.contains(&FRAMED) {
		return if frame_link.is_some() { Ok(Operation::Framed) } else { Err(NotAcceptable) };
	}
	if profiles.contains(&FLATTENED) {
		return Ok(Operation::Flattened);
	}
	if profiles.contains(&COMPACTED) {
		return Ok(Operation::Compacted);
	}
	Ok(Operation::Expanded)
}

#[cfg(test)]
mod tests {
	use super::*;
	use static_iref::iri;

	#[test]
	fn defaults_to_expanded() {
		assert_eq!(select_operation("", None).unwrap(), Operation::Expanded);
		assert_eq!(select_operation("http://example.org/unrelated", None).unwrap(), Operation::Expanded);
	}

	#[test]
	fn selects_compacted_and_flattened() {
		assert_eq!(select_operation(COMPACTED, None).unwrap(), Operation::Compacted);
		assert_eq!(select_operation(FLATTENED, None).unwrap(), Operation::Flattened);
	}

	#[test]
	fn framed_requires_a_frame_link() {
		assert!(select_operation(FRAMED, None).is_err());
		let frame = iri!("https://example.org/frame.jsonld");
		assert_eq!(select_operation(FRAMED, Some(frame)).unwrap(), Operation::Framed);
	}

	#[test]
	fn framed_profile_wins_over_others_when_satisfiable() {
		let frame = iri!("https://example.org/frame.jsonld");
		let profile = format!("{COMPACTED} {FRAMED}");
		assert_eq!(select_operation(&profile, Some(frame)).unwrap(), Operation::Framed);
	}
}
