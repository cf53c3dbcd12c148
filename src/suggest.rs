//! "Other popular sizes" generation
//!
//! Perturbs one field at a time (width ±10, aspect ±5, rim ±1), adds two
//! segment-flavoured variants, then deduplicates in generation order.
//! These are plausible alternates, not fitment-checked products.

use indexmap::IndexSet;

use crate::parse::TyreSize;
use crate::segment::Segment;
use crate::spec::SPEC;

/// Up to `limits.suggestions` distinct nearby sizes, excluding `size` itself.
pub fn suggest(size: &TyreSize, segment: Segment) -> Vec<TyreSize> {
    let ranges = &SPEC.ranges;
    let (w, a, r) = (
        i32::from(size.width()),
        i32::from(size.aspect()),
        i32::from(size.rim()),
    );

    let cw = |v: i32| ranges.width.clamp(v);
    let ca = |v: i32| ranges.aspect.clamp(v);
    let cr = |v: i32| ranges.rim.clamp(v);

    let mut candidates = vec![
        (cw(w + 10), a, r),
        (cw(w - 10), a, r),
        (w, ca(a + 5), r),
        (w, ca(a - 5), r),
        (w, a, cr(r + 1)),
        (w, a, cr(r - 1)),
    ];

    match segment {
        Segment::FourByFour | Segment::Suv => {
            candidates.push((cw(w + 20), ca(a + 5), r));
            candidates.push((cw(w + 10), a, cr(r + 1)));
        }
        Segment::Performance => {
            candidates.push((cw(w + 10), ca(a - 5), r));
            candidates.push((w, ca(a - 5), cr(r + 1)));
        }
        Segment::Passenger => {}
    }

    let unique: IndexSet<TyreSize> = candidates
        .into_iter()
        .filter_map(|(w, a, r)| to_size(w, a, r))
        .filter(|candidate| candidate != size)
        .collect();

    unique.into_iter().take(SPEC.limits.suggestions).collect()
}

/// Canonical strings for [`suggest`]
pub fn suggest_canonical(size: &TyreSize, segment: Segment) -> Vec<String> {
    suggest(size, segment).iter().map(TyreSize::canonical).collect()
}

fn to_size(w: i32, a: i32, r: i32) -> Option<TyreSize> {
    Some(TyreSize::new(
        u16::try_from(w).ok()?,
        u16::try_from(a).ok()?,
        u16::try_from(r).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_tyre_size;

    fn size(raw: &str) -> TyreSize {
        parse_tyre_size(raw).unwrap()
    }

    #[test]
    fn test_performance_suggestions_in_generation_order() {
        let s = size("225/45R19");
        let out = suggest_canonical(&s, Segment::Performance);
        assert_eq!(
            out,
            vec!["235/45R19", "215/45R19", "225/50R19", "225/40R19", "225/45R20"]
        );
    }

    #[test]
    fn test_passenger_has_no_extra_candidates() {
        let s = size("205/55R16");
        let out = suggest_canonical(&s, Segment::Passenger);
        assert_eq!(
            out,
            vec!["215/55R16", "195/55R16", "205/60R16", "205/50R16", "205/55R17"]
        );
    }

    #[test]
    fn test_clamped_candidates_equal_to_input_are_dropped() {
        let s = size("155/30R13");
        let out = suggest_canonical(&s, Segment::Passenger);
        assert_eq!(out, vec!["165/30R13", "155/35R13", "155/30R14"]);
    }

    #[test]
    fn test_duplicates_collapse_before_cap() {
        // Upper bounds: several perturbations clamp onto the same value
        let s = size("345/80R22");
        let out = suggest(&s, Segment::FourByFour);
        let canon: Vec<String> = out.iter().map(TyreSize::canonical).collect();
        assert_eq!(canon, vec!["335/80R22", "345/75R22", "345/80R21"]);
    }

    #[test]
    fn test_suggestions_are_distinct_capped_and_exclude_input() {
        for raw in ["225/45R19", "205/55R16", "275/65R18", "235/55R17", "155/30R13", "345/80R22"] {
            let s = size(raw);
            let seg = Segment::of(&s);
            let out = suggest(&s, seg);
            assert!(out.len() <= 5, "{}: {:?}", raw, out);
            assert!(!out.contains(&s), "{} suggested itself", raw);
            let unique: IndexSet<_> = out.iter().collect();
            assert_eq!(unique.len(), out.len());
        }
    }

    #[test]
    fn test_out_of_range_input_fields_are_clamped_when_perturbed() {
        let s = size("100/20R10");
        let out = suggest_canonical(&s, Segment::Passenger);
        assert_eq!(out[0], "155/20R10");
        assert!(out.contains(&"100/30R10".to_string()));
        assert!(out.contains(&"100/20R13".to_string()));
    }
}
