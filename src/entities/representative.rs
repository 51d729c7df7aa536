//! Customer support representative records

use serde::{Deserialize, Serialize};

/// Brands with their own support desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Brand {
    #[default]
    Sargent,
    #[serde(rename = "Corbin Russwin")]
    CorbinRusswin,
    #[serde(rename = "ACCENTRA")]
    Accentra,
    #[serde(rename = "Norton Rixson")]
    NortonRixson,
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Brand::Sargent => write!(f, "Sargent"),
            Brand::CorbinRusswin => write!(f, "Corbin Russwin"),
            Brand::Accentra => write!(f, "ACCENTRA"),
            Brand::NortonRixson => write!(f, "Norton Rixson"),
        }
    }
}

impl std::str::FromStr for Brand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "sargent" => Ok(Brand::Sargent),
            "corbinrusswin" | "corbin" => Ok(Brand::CorbinRusswin),
            "accentra" => Ok(Brand::Accentra),
            "nortonrixson" | "norton" => Ok(Brand::NortonRixson),
            _ => Err(format!(
                "Invalid brand: '{}'. Use 'sargent', 'corbin-russwin', 'accentra', or 'norton-rixson'",
                s
            )),
        }
    }
}

/// A support representative as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representative {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub brand: Brand,

    /// Territory codes or distributor names, in display order
    pub codes: Vec<String>,
}

impl Representative {
    /// `tel:` link with everything but digits stripped
    pub fn tel_link(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("tel:{}", digits)
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepresentativeList {
    pub revision: String,
    pub representatives: Vec<Representative>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_from_str_variants() {
        assert_eq!("Corbin Russwin".parse::<Brand>().unwrap(), Brand::CorbinRusswin);
        assert_eq!("corbin-russwin".parse::<Brand>().unwrap(), Brand::CorbinRusswin);
        assert_eq!("ACCENTRA".parse::<Brand>().unwrap(), Brand::Accentra);
        assert!("Medeco".parse::<Brand>().is_err());
    }

    #[test]
    fn test_brand_serde_uses_display_names() {
        let brand: Brand = serde_yml::from_str("Norton Rixson").unwrap();
        assert_eq!(brand, Brand::NortonRixson);
        assert_eq!(brand.to_string(), "Norton Rixson");
    }

    #[test]
    fn test_links() {
        let rep = Representative {
            name: "Test Rep".to_string(),
            phone: "(203) 498-5595".to_string(),
            email: "test.rep@example.com".to_string(),
            brand: Brand::Sargent,
            codes: vec![],
        };
        assert_eq!(rep.tel_link(), "tel:2034985595");
        assert_eq!(rep.mailto_link(), "mailto:test.rep@example.com");
    }
}
