use serde::{Deserialize, Serialize};

/// A container id paired with the fragment file that fills it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentDescriptor {
    #[serde(rename = "id")]
    pub container_id: String,
    pub file: String,
}

impl FragmentDescriptor {
    pub fn new(container_id: &str, file: &str) -> FragmentDescriptor {
        FragmentDescriptor {
            container_id: container_id.into(),
            file: file.into(),
        }
    }
}

const DEFAULT_SECTIONS: [(&str, &str); 10] = [
    ("navbar-container", "navbar.html"),
    ("sobre-nosotros-container", "sobre-nosotros.html"),
    ("servicios-container", "servicios.html"),
    ("consumo-container", "consumo.html"),
    ("credito-hipotecario-container", "credito-hipotecario.html"),
    ("credito-vehiculo-container", "credito-vehiculo.html"),
    ("credito-pensionados-container", "credito-pensionados.html"),
    ("seguros-container", "seguros.html"),
    ("alianzas-coomeva-container", "alianzas-coomeva.html"),
    ("footer-container", "footer.html"),
];

/// The sections of the site, in page order.
pub fn default_sections() -> Vec<FragmentDescriptor> {
    DEFAULT_SECTIONS.iter()
        .map(|(container_id, file)| FragmentDescriptor::new(container_id, file))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sections_start_with_navbar_and_end_with_footer() {
        let sections = default_sections();

        assert_eq!(sections.len(), 10);
        assert_eq!(sections.first().unwrap(), &FragmentDescriptor::new("navbar-container", "navbar.html"));
        assert_eq!(sections.last().unwrap(), &FragmentDescriptor::new("footer-container", "footer.html"));
    }

    #[test]
    fn descriptor_deserializes_from_id_and_file() {
        let descriptor: FragmentDescriptor = serde_json::from_str(r#"{"id": "seguros-container", "file": "seguros.html"}"#).unwrap();

        assert_eq!(descriptor, FragmentDescriptor::new("seguros-container", "seguros.html"));
    }
}
