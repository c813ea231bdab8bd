//! Locale name pools used to build student names

use crate::model::Gender;
use rand::seq::SliceRandom;
use rand::Rng;

/// Source of random first and last names
pub trait NameProvider {
    fn first_name<R: Rng + ?Sized>(&self, gender: Gender, rng: &mut R) -> &str;
    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> &str;
}

/// Portuguese (pt_PT) names
#[derive(Debug, Clone, Copy, Default)]
pub struct PortugueseNames;

pub const MALE_FIRST_NAMES: &[&str] = &[
    "Afonso", "Alexandre", "Álvaro", "André", "António", "Armando", "Artur", "Bernardo",
    "Bruno", "Carlos", "César", "Cristiano", "Daniel", "David", "Diogo", "Duarte",
    "Eduardo", "Emanuel", "Fábio", "Filipe", "Francisco", "Frederico", "Gabriel", "Gaspar",
    "Gil", "Gonçalo", "Guilherme", "Gustavo", "Hélder", "Henrique", "Hugo", "Igor",
    "Isaac", "Ivo", "Jaime", "Joaquim", "Jorge", "José", "João", "Lourenço",
    "Luís", "Manuel", "Marco", "Martim", "Mateus", "Miguel", "Nuno", "Paulo",
    "Pedro", "Rafael", "Renato", "Ricardo", "Rodrigo", "Rui", "Salvador", "Samuel",
    "Santiago", "Sérgio", "Simão", "Tiago", "Tomás", "Vasco", "Vicente", "Vítor",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Adriana", "Alice", "Alícia", "Ana", "Beatriz", "Bianca", "Bruna", "Camila",
    "Carla", "Carolina", "Catarina", "Clara", "Cláudia", "Constança", "Daniela", "Diana",
    "Eduarda", "Elisa", "Érica", "Fabiana", "Filipa", "Francisca", "Gabriela", "Helena",
    "Inês", "Irina", "Isabel", "Jéssica", "Joana", "Júlia", "Juliana", "Lara",
    "Laura", "Leonor", "Letícia", "Lia", "Luana", "Luísa", "Madalena", "Mafalda",
    "Margarida", "Maria", "Mariana", "Marta", "Matilde", "Melissa", "Mónica", "Nádia",
    "Núria", "Patrícia", "Pilar", "Rafaela", "Raquel", "Rita", "Rosa", "Sara",
    "Sílvia", "Sofia", "Soraia", "Tatiana", "Teresa", "Valentina", "Vera", "Vitória",
];

pub const LAST_NAMES: &[&str] = &[
    "Abreu", "Almeida", "Alves", "Amaral", "Andrade", "Antunes", "Araújo", "Azevedo",
    "Baptista", "Barbosa", "Barros", "Batista", "Borges", "Branco", "Brito", "Cabral",
    "Campos", "Cardoso", "Carneiro", "Carvalho", "Castro", "Coelho", "Correia", "Costa",
    "Cruz", "Cunha", "Dias", "Domingues", "Duarte", "Esteves", "Faria", "Fernandes",
    "Ferreira", "Figueiredo", "Fonseca", "Freitas", "Garcia", "Gaspar", "Gomes", "Gonçalves",
    "Guerreiro", "Henriques", "Jesus", "Leal", "Leite", "Lima", "Lopes", "Loureiro",
    "Macedo", "Machado", "Magalhães", "Maia", "Marques", "Martins", "Matos", "Melo",
    "Mendes", "Miranda", "Monteiro", "Morais", "Moreira", "Mota", "Moura", "Nascimento",
    "Neves", "Nogueira", "Nunes", "Oliveira", "Pacheco", "Paiva", "Pereira", "Pinheiro",
    "Pinto", "Pires", "Ramos", "Reis", "Ribeiro", "Rocha", "Rodrigues", "Santos",
    "Sequeira", "Silva", "Simões", "Soares", "Sousa", "Tavares", "Teixeira", "Torres",
    "Valente", "Vaz", "Vieira",
];

impl NameProvider for PortugueseNames {
    fn first_name<R: Rng + ?Sized>(&self, gender: Gender, rng: &mut R) -> &str {
        let pool = match gender {
            Gender::Male => MALE_FIRST_NAMES,
            Gender::Female => FEMALE_FIRST_NAMES,
        };
        pool.choose(rng).copied().unwrap_or_default()
    }

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        LAST_NAMES.choose(rng).copied().unwrap_or_default()
    }
}
