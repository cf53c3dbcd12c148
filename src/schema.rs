//! JSON-LD structured data
//!
//! Pricing, URLs and store details are placeholder tokens (`[LOWEST PRICE]`
//! etc.) to be filled in by whoever publishes the page.

use serde_json::{json, Value};

use crate::parse::TyreSize;
use crate::spec::Brand;

/// Kind of structured-data document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Product,
    Faq,
    LocalBusiness,
}

impl SchemaKind {
    /// Output filename for this document
    pub fn file_name(&self, size: &TyreSize) -> String {
        match self {
            Self::Product => format!("{}.product.jsonld", size.file_stem()),
            Self::Faq => format!("{}.faq.jsonld", size.file_stem()),
            Self::LocalBusiness => "localbusiness.jsonld".to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Product => "Product JSON-LD",
            Self::Faq => "FAQ JSON-LD",
            Self::LocalBusiness => "LocalBusiness JSON-LD",
        }
    }

    pub fn build(&self, size: &TyreSize, brand: &Brand) -> Value {
        match self {
            Self::Product => product(size, brand),
            Self::Faq => faq(size),
            Self::LocalBusiness => local_business(brand),
        }
    }
}

pub fn product(size: &TyreSize, brand: &Brand) -> Value {
    let name = &brand.name;
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": format!("{size} Tyres"),
        "category": "Tyres",
        "brand": {"@type": "Brand", "name": "Various"},
        "description": format!(
            "Shop {size} tyres online at {name}. Best Price Guarantee with fitting and balancing included. Nationwide stores and easy booking."
        ),
        "additionalProperty": [
            {"@type": "PropertyValue", "name": "Width", "value": size.width_str()},
            {"@type": "PropertyValue", "name": "Aspect Ratio", "value": size.aspect_str()},
            {"@type": "PropertyValue", "name": "Rim Diameter", "value": size.rim_str()},
        ],
        "offers": {
            "@type": "AggregateOffer",
            "priceCurrency": brand.currency,
            "lowPrice": "[LOWEST PRICE]",
            "highPrice": "[HIGHEST PRICE]",
            "offerCount": "[NUMBER OF LISTINGS]",
            "availability": "https://schema.org/InStock",
            "url": "[CANONICAL URL FOR THIS SIZE PAGE]",
        },
    })
}

pub fn faq(size: &TyreSize) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": [
            question(
                &format!("What vehicles use {size} tyres?"),
                &format!("Many hatchbacks, sedans and SUVs use {size} tyres. Use our online tyre finder to confirm fitment for your vehicle and book fitting at a nearby store."),
            ),
            question(
                &format!("Can I buy {size} tyres online and fit in store?"),
                &format!("Yes. Order {size} tyres online, choose a store and a time that suits you, and our team will fit and balance your new tyres with disposal included."),
            ),
            question(
                "Do prices include fitting and balancing?",
                "Yes. Our all inclusive pricing covers professional fitting, balancing and old tyre disposal. No hidden extras.",
            ),
        ],
    })
}

fn question(name: &str, answer: &str) -> Value {
    json!({
        "@type": "Question",
        "name": name,
        "acceptedAnswer": {"@type": "Answer", "text": answer},
    })
}

/// Store listing; independent of the tyre size
pub fn local_business(brand: &Brand) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "AutomotiveBusiness",
        "name": format!("{} [STORE NAME]", brand.name),
        "url": "[STORE PAGE URL]",
        "telephone": "[STORE PHONE]",
        "priceRange": "$$",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "[STREET ADDRESS]",
            "addressLocality": "[CITY]",
            "addressRegion": "[STATE]",
            "postalCode": "[POSTCODE]",
            "addressCountry": brand.country_code,
        },
        "openingHoursSpecification": [
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                "opens": "08:00",
                "closes": "17:00",
            },
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Saturday"],
                "opens": "08:00",
                "closes": "12:00",
            },
        ],
        "areaServed": {"@type": "AdministrativeArea", "name": "[PRIMARY SUBURBS OR CITY]"},
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_tyre_size;
    use crate::spec::default_brand;

    #[test]
    fn test_product_properties() {
        let size = parse_tyre_size("225 45 19").unwrap();
        let doc = product(&size, &default_brand());
        assert_eq!(doc["@type"], "Product");
        assert_eq!(doc["name"], "225/45R19 Tyres");
        let props = doc["additionalProperty"].as_array().unwrap();
        assert_eq!(props[0]["value"], "225");
        assert_eq!(props[1]["name"], "Aspect Ratio");
        assert_eq!(props[1]["value"], "45");
        assert_eq!(props[2]["value"], "19");
        assert_eq!(doc["offers"]["priceCurrency"], "AUD");
        assert_eq!(doc["offers"]["lowPrice"], "[LOWEST PRICE]");
    }

    #[test]
    fn test_faq_has_three_templated_questions() {
        let size = parse_tyre_size("205/55R16").unwrap();
        let doc = faq(&size);
        let entities = doc["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), 3);
        assert_eq!(entities[0]["name"], "What vehicles use 205/55R16 tyres?");
        assert!(entities[1]["acceptedAnswer"]["text"]
            .as_str()
            .unwrap()
            .contains("Order 205/55R16 tyres online"));
        assert_eq!(entities[2]["name"], "Do prices include fitting and balancing?");
    }

    #[test]
    fn test_local_business_independent_of_size() {
        let brand = default_brand();
        let a = SchemaKind::LocalBusiness.build(&parse_tyre_size("205/55R16").unwrap(), &brand);
        let b = SchemaKind::LocalBusiness.build(&parse_tyre_size("275/65R18").unwrap(), &brand);
        assert_eq!(a, b);
        assert_eq!(a["name"], "Bob Jane T-Marts [STORE NAME]");
        assert_eq!(a["address"]["addressCountry"], "AU");
    }

    #[test]
    fn test_file_names() {
        let size = parse_tyre_size("225/45R19").unwrap();
        assert_eq!(SchemaKind::Product.file_name(&size), "225-45R19.product.jsonld");
        assert_eq!(SchemaKind::Faq.file_name(&size), "225-45R19.faq.jsonld");
        assert_eq!(SchemaKind::LocalBusiness.file_name(&size), "localbusiness.jsonld");
    }
}
