//! Wire shapes returned by the remote creature API, and their mapping into
//! the domain model.

use serde::{Deserialize, Serialize};

use crate::domain::{CreatureId, CreatureRecord, CreatureSummary};

/// `GET /pokemon?limit=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonPage {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl From<NamedResource> for CreatureSummary {
    fn from(value: NamedResource) -> Self {
        Self {
            name: value.name,
            url: value.url,
        }
    }
}

/// `GET /pokemon/{nameOrId}` and the per-item detail urls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonResource {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sprites: Option<Sprites>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: TypeRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
}

impl From<PokemonResource> for CreatureRecord {
    fn from(value: PokemonResource) -> Self {
        let image_url = value
            .sprites
            .and_then(|sprites| sprites.other)
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default)
            .filter(|url| !url.is_empty());

        Self {
            id: CreatureId(value.id),
            name: value.name,
            image_url,
            types: value.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }
}
