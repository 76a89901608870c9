//! Static landing-page content for the VAGA BLINDADA ROV course.
//!
//! The document is built once and served verbatim; nothing here is mutable.

use serde::Serialize;
use std::sync::LazyLock;

#[derive(Debug, Clone, Serialize)]
pub struct CourseInfo {
    pub product: Product,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub benefits: Vec<Benefit>,
    pub course_content: Vec<IconItem>,
    pub bonuses: Vec<IconItem>,
    pub offers: Vec<Offer>,
    pub instructor: Instructor,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub price: f64,
    pub old_price: f64,
    pub currency: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub announcement: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub video_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

/// A module or bonus card: icon, title, one-line description.
#[derive(Debug, Clone, Serialize)]
pub struct IconItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A promotional block. Offers list either what is `included` or the
/// `benefits` of buying now; the absent list is omitted from the JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Offer {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlight: &'static str,
    pub urgency: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<&'static str>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Instructor {
    pub name: &'static str,
    pub bio: &'static str,
    pub experience: &'static str,
    pub photo: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

static COURSE_INFO: LazyLock<CourseInfo> = LazyLock::new(build_course_info);

/// Returns the course page document. Every call yields the same instance.
pub fn course_info() -> &'static CourseInfo {
    &COURSE_INFO
}

fn icon_item(icon: &'static str, title: &'static str, description: &'static str) -> IconItem {
    IconItem {
        icon,
        title,
        description,
    }
}

fn build_course_info() -> CourseInfo {
    CourseInfo {
        product: Product {
            name: "VAGA BLINDADA ROV",
            subtitle: "Curso Completo de Operador ROV com Garantia de Emprego",
            price: 297.00,
            old_price: 597.00,
            currency: "BRL",
        },
        hero: Hero {
            announcement: "🚨 ÚLTIMAS VAGAS DISPONÍVEIS - GARANTA JÁ A SUA!",
            title: "VAGA BLINDADA ROV",
            subtitle: "Torne-se um Operador ROV Certificado e Garanta sua Vaga no Mercado Offshore",
            video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        },
        stats: vec![
            Stat {
                number: "95%",
                label: "Taxa de Empregabilidade",
            },
            Stat {
                number: "R$ 15k",
                label: "Salário Médio Inicial",
            },
            Stat {
                number: "500+",
                label: "Alunos Certificados",
            },
            Stat {
                number: "24h",
                label: "Suporte Direto",
            },
        ],
        benefits: vec![
            Benefit {
                title: "🎯 Certificação Internacional",
                description: "Certificado reconhecido mundialmente pela indústria offshore",
            },
            Benefit {
                title: "💼 Garantia de Emprego",
                description: "Programa exclusivo de colocação no mercado de trabalho",
            },
            Benefit {
                title: "🌊 Treinamento Prático",
                description: "Simuladores reais de ROV usados na indústria",
            },
            Benefit {
                title: "📱 Acesso Vitalício",
                description: "Curso disponível para sempre + atualizações gratuitas",
            },
            Benefit {
                title: "👨‍🏫 Mentoria Individual",
                description: "Acompanhamento personalizado durante todo o curso",
            },
            Benefit {
                title: "🌐 Network Exclusivo",
                description: "Acesso à comunidade de profissionais ROV no Brasil",
            },
        ],
        course_content: vec![
            icon_item(
                "🤖",
                "Fundamentos de ROV",
                "História, tipos, componentes e aplicações industriais",
            ),
            icon_item(
                "⚙️",
                "Sistemas e Componentes",
                "Thrusters, câmeras, manipuladores e sensores",
            ),
            icon_item(
                "🕹️",
                "Operação e Pilotagem",
                "Técnicas avançadas de controle e navegação",
            ),
            icon_item(
                "🔧",
                "Manutenção Preventiva",
                "Inspeção, diagnóstico e reparo de equipamentos",
            ),
            icon_item(
                "📋",
                "Segurança Offshore",
                "Protocolos de segurança e procedimentos emergenciais",
            ),
            icon_item(
                "📜",
                "Certificação Final",
                "Prova prática + teórica para certificação internacional",
            ),
        ],
        bonuses: vec![
            icon_item(
                "📚",
                "E-book: Manual Completo ROV",
                "Guia definitivo com 200+ páginas sobre ROV (Valor: R$ 97)",
            ),
            icon_item(
                "🎥",
                "Masterclass: Mercado Offshore",
                "Como conseguir sua primeira vaga offshore (Valor: R$ 197)",
            ),
            icon_item(
                "💻",
                "Software de Simulação",
                "Acesso ao simulador ROV profissional por 1 ano (Valor: R$ 397)",
            ),
            icon_item(
                "🤝",
                "Consultoria de Carreira",
                "1h de consultoria individual para alavancar sua carreira (Valor: R$ 297)",
            ),
            icon_item(
                "📱",
                "App Mobile Exclusivo",
                "Aplicativo com conteúdo offline e exercícios práticos (Valor: R$ 97)",
            ),
        ],
        offers: vec![
            Offer {
                title: "🎁 OFERTA ESPECIAL - APENAS HOJE!",
                subtitle: "De R$ 597 por apenas R$ 297",
                highlight: "ECONOMIA DE R$ 300",
                urgency: "Oferta válida apenas para as próximas 24 horas",
                included: Some(vec![
                    "✅ Curso Completo VAGA BLINDADA ROV",
                    "✅ Certificação Internacional",
                    "✅ Todos os 5 Bônus (Valor R$ 1.085)",
                    "✅ Garantia de Emprego",
                    "✅ Suporte 24h por 6 meses",
                    "✅ Acesso Vitalício",
                    "✅ Garantia de 30 dias",
                ]),
                benefits: None,
            },
            Offer {
                title: "🔥 ÚLTIMO DIA DA PROMOÇÃO",
                subtitle: "Não perca esta oportunidade única!",
                highlight: "ÚLTIMAS 12 VAGAS",
                urgency: "Após esgotar as vagas, preço volta para R$ 597",
                included: None,
                benefits: Some(vec![
                    "💰 Economia imediata de R$ 300",
                    "🚀 Entrada no mercado mais rápida",
                    "📈 ROI em menos de 30 dias",
                    "🎯 Vaga garantida ou seu dinheiro de volta",
                ]),
            },
        ],
        instructor: Instructor {
            name: "Eng. Carlos Marinho",
            bio: "Especialista em ROV com mais de 15 anos de experiência offshore",
            experience: "Ex-Petrobras • Instrutor Certificado • 1000+ ROVs operados",
            photo: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300",
        },
        testimonials: vec![
            Testimonial {
                name: "João Silva",
                role: "Operador ROV - Oceaneering",
                text: "Em 2 meses já estava empregado offshore ganhando R$ 18k. O curso é completo demais!",
                rating: 5,
            },
            Testimonial {
                name: "Maria Santos",
                role: "ROV Pilot - Subsea 7",
                text: "A certificação abriu portas que eu nem imaginava. Hoje trabalho em projetos internacionais.",
                rating: 5,
            },
            Testimonial {
                name: "Pedro Costa",
                role: "Senior ROV Tech - TechnipFMC",
                text: "Carlos é referência no mercado. O conteúdo é atual e extremamente prático.",
                rating: 5,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_is_stable() {
        let first = serde_json::to_vec(course_info()).unwrap();
        let second = serde_json::to_vec(course_info()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn offers_omit_the_absent_list() {
        let value = serde_json::to_value(course_info()).unwrap();
        let offers = value["offers"].as_array().unwrap();
        assert!(offers[0].get("included").is_some());
        assert!(offers[0].get("benefits").is_none());
        assert!(offers[1].get("benefits").is_some());
        assert!(offers[1].get("included").is_none());
    }

    #[test]
    fn page_sections_are_populated() {
        let info = course_info();
        assert_eq!(info.product.currency, "BRL");
        assert!(info.product.price < info.product.old_price);
        assert_eq!(info.stats.len(), 4);
        assert_eq!(info.benefits.len(), 6);
        assert_eq!(info.course_content.len(), 6);
        assert_eq!(info.bonuses.len(), 5);
        assert_eq!(info.testimonials.len(), 3);
        assert!(info.testimonials.iter().all(|t| t.rating <= 5));
    }
}
