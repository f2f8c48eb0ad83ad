//! Menu text fixtures shared by the integration tests
#![allow(dead_code)]

/// A menu as it might come back from text recognition, with the expected parse.
#[derive(Debug, Clone)]
pub struct MenuFixture {
    pub name: &'static str,
    pub text: &'static str,
    pub region: Option<&'static str>,
    pub expected_items: usize,
    pub expected_entree: Option<&'static str>,
    pub expected_main: Option<&'static str>,
    pub expected_beverage: Option<&'static str>,
}

pub const SCENARIO_A: &str = "Carpaccio Regional\nVirado à Paulista\nVinho Tinto Reserva";

pub const MENU_FIXTURES: &[MenuFixture] = &[
    MenuFixture {
        name: "sao_paulo_bistro",
        text: "CARDÁPIO\n\
               Entradas\n\
               Entrada: Bruschetta de Tomate ..... R$ 28\n\
               Pastel de Feira R$ 18\n\
               Virado à Paulista ........ R$ 62,00\n\
               Moqueca de Camarão R$ 89\n\
               Vinho Tinto Malbec R$ 120\n\
               Caipirinha de Limão R$ 24\n\
               Pudim de Leite R$ 16\n\
               Página 1",
        region: Some("SP"),
        expected_items: 10,
        expected_entree: Some("Entradas"),
        expected_main: Some("CARDÁPIO"),
        expected_beverage: Some("Vinho Tinto Malbec"),
    },
    MenuFixture {
        name: "rio_boteco",
        text: "Petisco: Bolinho de Bacalhau R$ 32\n\
               Feijoada Completa R$ 75\n\
               Cerveja Bohemia R$ 14\n\
               Água de Coco R$ 9",
        region: Some("RJ"),
        expected_items: 4,
        expected_entree: Some("Petisco: Bolinho de Bacalhau"),
        expected_main: Some("Feijoada Completa"),
        expected_beverage: Some("Cerveja Bohemia"),
    },
    MenuFixture {
        name: "no_drinks",
        text: "Salada Caprese\nRisoto de Cogumelos R$ 58\nBrownie com Sorvete",
        region: None,
        expected_items: 3,
        expected_entree: None,
        expected_main: Some("Salada Caprese"),
        expected_beverage: None,
    },
];

/// Smallest valid PNG header; enough for format sniffing.
pub const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
