//! Page copy composition
//!
//! Fixed prose and bullet blocks selected per [`Segment`] and interpolated
//! with the canonical size and brand. All text passes through [`sanitize`].

use crate::parse::TyreSize;
use crate::segment::Segment;
use crate::spec::{Brand, SPEC};

const ELLIPSIS: char = '…';

/// All copy blocks for one size page
#[derive(Debug, Clone, PartialEq)]
pub struct PageCopy {
    pub keywords: Vec<String>,
    pub meta_title: String,
    pub meta_description: String,
    pub intro: String,
    pub buy: String,
    pub bullets: [String; 4],
    pub cta: String,
}

impl PageCopy {
    /// Words across the intro and buy sections
    pub fn body_word_count(&self) -> usize {
        word_count(&self.intro) + word_count(&self.buy)
    }
}

/// Compose every copy block for `size`
pub fn compose(size: &TyreSize, segment: Segment, brand: &Brand) -> PageCopy {
    let size_str = size.canonical();
    PageCopy {
        keywords: target_keywords(&size_str, brand),
        meta_title: meta_title(&size_str, brand),
        meta_description: meta_description(&size_str, brand),
        intro: intro(&size_str, segment),
        buy: buy(&size_str, brand),
        bullets: bullets(segment, size.aspect()),
        cta: sanitize(&format!("Shop {} tyres today at {}.", size_str, brand.name)),
    }
}

/// Replace em and en dashes with a plain hyphen
pub fn sanitize(text: &str) -> String {
    text.replace(['\u{2014}', '\u{2013}'], "-")
}

/// Sanitize and trim, then cut to at most `max_len` characters, ending
/// with a single `…` when truncated.
pub fn limit_chars(s: &str, max_len: usize) -> String {
    let s = sanitize(s.trim());
    if s.chars().count() <= max_len {
        return s;
    }
    let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
    let mut out = head.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

pub fn target_keywords(size: &str, brand: &Brand) -> Vec<String> {
    vec![
        format!("{} tyres", size),
        format!("buy {} tyres online", size),
        format!("best price {} {}", size, brand.country),
        format!("{} tyres", brand.name),
    ]
}

pub fn meta_title(size: &str, brand: &Brand) -> String {
    limit_chars(
        &format!("{} Tyres | Best Price Online | {}", size, brand.name),
        SPEC.limits.meta_title,
    )
}

pub fn meta_description(size: &str, brand: &Brand) -> String {
    limit_chars(
        &format!(
            "Shop {} tyres online at {}. Best Price Guarantee, fitting and balancing included, nationwide stores. Book online today.",
            size, brand.name
        ),
        SPEC.limits.meta_description,
    )
}

pub fn intro(size: &str, segment: Segment) -> String {
    let txt = match segment {
        Segment::Performance => format!(
            "Engineered for performance vehicles, {size} tyres deliver sharp handling, cornering grip and responsive braking. \
             The lower profile helps keep steering precise while modern compounds support stability at speed. \
             Choose {size} for confident control on Australian roads in wet and dry conditions."
        ),
        Segment::FourByFour => format!(
            "Designed for SUVs and 4x4s, {size} tyres provide strength, stability and traction on highways and light off-road terrain. \
             Robust constructions and versatile tread patterns deliver comfort and control across long distances. \
             Choose {size} for dependable performance in varied Australian conditions."
        ),
        Segment::Suv => format!(
            "Built for SUVs and crossovers, {size} tyres offer stable handling, sure grip and a comfortable ride. \
             Durable, touring-focused tread patterns make daily errands and road trips smoother and quieter. \
             Choose {size} for reliable performance across Australian roads and weather."
        ),
        Segment::Passenger => format!(
            "Popular with hatchbacks and sedans, {size} tyres balance safety, comfort and fuel efficiency for everyday driving. \
             Tuned tread patterns help reduce noise while maintaining confident braking in wet and dry conditions. \
             Choose {size} for long-lasting performance on Australian roads."
        ),
    };
    sanitize(&txt)
}

pub fn buy(size: &str, brand: &Brand) -> String {
    let name = &brand.name;
    sanitize(&format!(
        "Buying {size} tyres is quick and simple with {name}. Use our online tyre finder to select the right fit in minutes. \
         Pricing is transparent and all-inclusive, covering professional fitting, balancing and the responsible disposal of your old tyres. \
         With our Best Tyre Price Guarantee, Tyre Satisfaction Guarantee and nationwide stores, you will enjoy great value, easy booking and expert service from checkout to fitment."
    ))
}

/// Proof point first, then three segment bullets
pub fn bullets(segment: Segment, aspect: u16) -> [String; 4] {
    let base = match segment {
        Segment::Performance => [
            "Precise steering and cornering grip",
            "Strong, predictable braking",
            "Sporty road feel with comfort in mind",
        ],
        Segment::FourByFour => [
            "Confident highway and light off-road grip",
            "Comfortable, stable ride",
            "Durable construction for long life",
        ],
        Segment::Suv => [
            "Stable handling for larger SUVs",
            "Quiet, comfortable touring",
            "Reliable wet and dry performance",
        ],
        Segment::Passenger => [
            "Comfortable, quiet everyday ride",
            "Confident wet and dry traction",
            "Fuel efficient, long wearing designs",
        ],
    };
    [
        sanitize(segment.proof_point(aspect)),
        base[0].to_string(),
        base[1].to_string(),
        base[2].to_string(),
    ]
}
