//! Site content: work items, testimonials, before/after projects and contacts.
//!
//! Content is static for the lifetime of the app. The built-in content mirrors the
//! workshop's website; a TOML or JSON file can replace it wholesale.
//!
//! # Example Content File
//!
//! ```toml
//! brand = "F GARAGE"
//! slogan = "Arranjamos Carros"
//! hero_backgrounds = ["abstract-chrome-1", "hero-chevrolet-v8"]
//!
//! [[work_items]]
//! id = 1
//! title = "V8 Big Block"
//! description = "Restauração total de motor Chevy 454."
//! image = "/images/v8-engine.png"
//! year = "2024"
//! ```
//!
//! Sections missing from a file fall back to the built-in content.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// A finished job shown in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub year: String,
}

impl WorkItem {
    /// Logbook number shown on the gallery badge.
    pub fn logbook_number(&self) -> u32 {
        100 + self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    /// 0-5, halves allowed
    pub stars: f32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeforeAfterProject {
    pub title: String,
    pub description: String,
    pub before_image: String,
    pub after_image: String,
    #[serde(default = "default_before_label")]
    pub before_label: String,
    #[serde(default = "default_after_label")]
    pub after_label: String,
}

fn default_before_label() -> String {
    "ANTES".to_string()
}

fn default_after_label() -> String {
    "DEPOIS".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    /// Count-up duration
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub whatsapp: String,
    pub address: String,
    pub hours: String,
    pub email: String,
    pub map_url: String,
}

impl ContactInfo {
    /// Phone number without the Portuguese country code.
    pub fn local_phone(&self) -> &str {
        self.phone.strip_prefix("+351 ").unwrap_or(&self.phone)
    }
}

/// Everything the views render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: String,
    pub slogan: String,
    /// One-line brand statement shown in the footer
    pub tagline: String,
    pub hero_backgrounds: Vec<String>,
    pub work_items: Vec<WorkItem>,
    pub testimonials: Vec<Testimonial>,
    pub before_after: Vec<BeforeAfterProject>,
    pub services: Vec<Service>,
    pub stats: Vec<Stat>,
    pub contacts: ContactInfo,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SiteContent {
    /// The workshop's own content.
    pub fn builtin() -> Self {
        Self {
            brand: "F GARAGE".to_string(),
            slogan: "Arranjamos Carros".to_string(),
            tagline: "Preservando a história automotiva com engenharia de precisão e paixão pelo metal."
                .to_string(),
            hero_backgrounds: [
                "abstract-chrome-1",
                "abstract-chrome-2",
                "hero-abstract-bg",
                "hero-tire-chrome",
                "hero-chevrolet-v8",
                "abstract-engine-forms",
                "abstract-chrome-blue",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            work_items: vec![
                work_item(
                    1,
                    "V8 Big Block",
                    "Restauração total de motor Chevy 454. Performance pura e precisão mecânica.",
                    "/images/v8-engine.png",
                    "2024",
                ),
                work_item(
                    2,
                    "Cofre de Motor Mustang",
                    "Limpeza detalhada, pintura de coletores e afinação de carburador Edelbrock.",
                    "/images/mustang-engine.png",
                    "2023",
                ),
                work_item(
                    3,
                    "Chassis & Suspensão",
                    "Substituição de casquilhos e reforço estrutural para condução desportiva.",
                    "/images/chassis-suspension.png",
                    "2024",
                ),
                work_item(
                    4,
                    "A Alma da Oficina",
                    "Ferramentas certas, mãos experientes. Onde o metal ganha vida.",
                    "/images/workshop-soul.png",
                    "2024",
                ),
            ],
            testimonials: vec![
                testimonial(
                    "Restauraram o motor do meu Mustang 67 com uma perfeição que não pensei ser possível. Voltou a roncar como novo.",
                    5.0,
                    "António Silva",
                ),
                testimonial(
                    "Profissionalismo e paixão pelo detalhe. A equipa da F Garage percebe mesmo de clássicos americanos.",
                    4.0,
                    "Carlos Mendes",
                ),
                testimonial(
                    "Depois de procurar em várias oficinas, finalmente encontrei quem tratasse do meu Chevrolet com o respeito que merece.",
                    4.5,
                    "Ricardo Ferreira",
                ),
            ],
            before_after: vec![
                BeforeAfterProject {
                    title: "Chevrolet Corvette Stingray 1964".to_string(),
                    description: "Restauro integral de carroçaria, repintura Rally Red original e reconstrução do motor 327 V8 com 365cv.".to_string(),
                    before_image: "corvette-before".to_string(),
                    after_image: "corvette-after".to_string(),
                    before_label: default_before_label(),
                    after_label: default_after_label(),
                },
                BeforeAfterProject {
                    title: "Ford Mustang Fastback 1969".to_string(),
                    description: "Rebuild completo do motor 351 Windsor V8, suspensão de competição e acabamentos race-spec autênticos.".to_string(),
                    before_image: "mustang-before".to_string(),
                    after_image: "mustang-after".to_string(),
                    before_label: default_before_label(),
                    after_label: default_after_label(),
                },
            ],
            services: vec![
                service(
                    "Restauro de Motores",
                    "Reconstrução completa de motores V8, desde a desmontagem até ao último parafuso apertado com precisão.",
                ),
                service(
                    "Pintura & Acabamentos",
                    "Preparação de carroçaria, pintura de cofre de motor e proteção de chassis com produtos premium.",
                ),
                service(
                    "Afinação de Performance",
                    "Carburadores, ignição e sistemas de combustível. Fazemos o seu clássico roncar como deve ser.",
                ),
                service(
                    "Suspensão & Chassis",
                    "Substituição de casquilhos, amortecedores e reforço estrutural para condução desportiva segura.",
                ),
                service(
                    "Detailing Premium",
                    "Polimento profissional, tratamento de cromados e proteção cerâmica para brilho duradouro.",
                ),
                service(
                    "Inspeção & Diagnóstico",
                    "Avaliação técnica completa antes da compra ou para identificar trabalhos necessários.",
                ),
            ],
            stats: vec![
                stat(150, "+", "Clássicos Restaurados", 2000),
                stat(25, "", "Anos de Experiência", 1500),
                stat(100, "%", "Clientes Satisfeitos", 1800),
                stat(500, "+", "Projetos Concluídos", 2200),
            ],
            contacts: ContactInfo {
                phone: "+351 912 345 678".to_string(),
                whatsapp: "351912345678".to_string(),
                address: "Estrada de Paço de Arcos, 12, 2735-307 Agualva-Cacém".to_string(),
                hours: "Seg - Sex: 09:00 - 18:30 | Sáb: 09:00 - 13:00".to_string(),
                email: "contato@fgarage.pt".to_string(),
                map_url: "https://maps.app.goo.gl/6AmUNBUaj6x1HVwH6".to_string(),
            },
        }
    }

    /// Load content from a `.toml` or `.json` file and validate it.
    pub fn load(path: &Path) -> ContentResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let content = match extension.as_deref() {
            Some("toml") => Self::from_toml(&contents)?,
            Some("json") => Self::from_json(&contents)?,
            _ => return Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        };
        content.validate()?;
        Ok(content)
    }

    pub fn from_toml(contents: &str) -> ContentResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json(contents: &str) -> ContentResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn to_json(&self) -> ContentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject content the carousels cannot mount.
    pub fn validate(&self) -> ContentResult<()> {
        if self.hero_backgrounds.is_empty() {
            return Err(ContentError::EmptySection("hero_backgrounds"));
        }
        if self.work_items.is_empty() {
            return Err(ContentError::EmptySection("work_items"));
        }
        if self.testimonials.is_empty() {
            return Err(ContentError::EmptySection("testimonials"));
        }
        if self.before_after.is_empty() {
            return Err(ContentError::EmptySection("before_after"));
        }
        for t in &self.testimonials {
            if !(0.0..=5.0).contains(&t.stars) {
                return Err(ContentError::InvalidRating {
                    name: t.name.clone(),
                    rating: t.stars,
                });
            }
        }
        Ok(())
    }
}

fn work_item(id: u32, title: &str, description: &str, image: &str, year: &str) -> WorkItem {
    WorkItem {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        year: year.to_string(),
    }
}

fn testimonial(quote: &str, stars: f32, name: &str) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        stars,
        name: name.to_string(),
    }
}

fn service(title: &str, description: &str) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn stat(value: u32, suffix: &str, label: &str, duration_ms: u64) -> Stat {
    Stat {
        value,
        suffix: suffix.to_string(),
        label: label.to_string(),
        duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let content = SiteContent::builtin();
        assert!(content.validate().is_ok());
        assert_eq!(content.work_items.len(), 4);
        assert_eq!(content.hero_backgrounds.len(), 7);
        assert_eq!(content.work_items[0].logbook_number(), 101);
    }

    #[test]
    fn test_local_phone() {
        let content = SiteContent::builtin();
        assert_eq!(content.contacts.local_phone(), "912 345 678");
    }

    #[test]
    fn test_partial_toml_keeps_builtin_sections() {
        let toml = r#"
            slogan = "Clássicos em boas mãos"

            [[testimonials]]
            quote = "Impecável."
            stars = 3.5
            name = "Rui Costa"
        "#;

        let content = SiteContent::from_toml(toml).unwrap();
        assert_eq!(content.slogan, "Clássicos em boas mãos");
        assert_eq!(content.testimonials.len(), 1);
        assert_eq!(content.brand, "F GARAGE");
        assert_eq!(content.work_items.len(), 4);
        assert!(content.tagline.starts_with("Preservando"));
    }

    #[test]
    fn test_before_after_labels_default() {
        let toml = r#"
            [[before_after]]
            title = "Camaro 1970"
            description = "Chapa e pintura."
            before_image = "camaro-before"
            after_image = "camaro-after"
        "#;

        let content = SiteContent::from_toml(toml).unwrap();
        assert_eq!(content.before_after[0].before_label, "ANTES");
        assert_eq!(content.before_after[0].after_label, "DEPOIS");
    }

    #[test]
    fn test_json_roundtrip_of_builtin() {
        let content = SiteContent::builtin();
        let json = content.to_json().unwrap();
        assert_eq!(SiteContent::from_json(&json).unwrap(), content);
    }

    #[test]
    fn test_validate_rejects_empty_gallery() {
        let mut content = SiteContent::builtin();
        content.work_items.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptySection("work_items"))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_rating() {
        let mut content = SiteContent::builtin();
        content.testimonials[0].stars = 6.0;
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidRating { .. })
        ));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let path = std::env::temp_dir().join(format!("fgarage-content-{}.yaml", std::process::id()));
        std::fs::write(&path, "brand: x").unwrap();
        let result = SiteContent::load(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ContentError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_toml_file() {
        let path = std::env::temp_dir().join(format!("fgarage-content-{}.toml", std::process::id()));
        std::fs::write(&path, "brand = \"F GARAGE LISBOA\"\n").unwrap();
        let result = SiteContent::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(result.unwrap().brand, "F GARAGE LISBOA");
    }

    #[test]
    fn test_load_missing_file() {
        let result = SiteContent::load(Path::new("/nonexistent/fgarage/content.toml"));
        assert!(matches!(result, Err(ContentError::Read { .. })));
    }
}
