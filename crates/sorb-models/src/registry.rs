//! Static model catalog and by-name construction.

use crate::error::{ModelError, ModelResult};
use crate::model::IsothermModel;
use crate::{
    Bet, ChemiPhysisorption, DsLangmuir, DsToth, DubininAstakhov, DubininRadushkevich, Freundlich,
    Gab, Henry, JensenSeaton, Langmuir, Quadratic, TemkinApprox, Toth, TsLangmuir, Virial,
};
use sorb_core::Real;

type Factory = fn(&[(&str, Real)], Option<Real>) -> ModelResult<Box<dyn IsothermModel>>;

/// One catalog row: canonical name, capability flags and a factory
/// building the model from named parameters.
pub struct ModelCatalogEntry {
    pub name: &'static str,
    /// Whether the model is well behaved enough for adsorbed-solution
    /// calculations (finite spreading pressure, Henry-law limit).
    pub iast_eligible: bool,
    /// Whether `initial_guess` produces a usable fitting seed.
    pub guessable: bool,
    pub factory: Factory,
}

fn param(params: &[(&str, Real)], model: &'static str, name: &'static str) -> ModelResult<Real> {
    params
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
        .ok_or(ModelError::MissingParam { model, param: name })
}

fn temperature_for(model: &'static str, temperature: Option<Real>) -> ModelResult<Real> {
    temperature.ok_or_else(|| ModelError::InvalidParam {
        model,
        what: "temperature is required to construct this model".to_string(),
    })
}

fn build_henry(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    Ok(Box::new(Henry::new(param(p, Henry::NAME, "K")?)))
}

fn build_langmuir(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    Ok(Box::new(Langmuir::new(
        param(p, Langmuir::NAME, "K")?,
        param(p, Langmuir::NAME, "n_m")?,
    )))
}

fn build_dslangmuir(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = DsLangmuir::NAME;
    Ok(Box::new(DsLangmuir::new(
        param(p, m, "n_m1")?,
        param(p, m, "K1")?,
        param(p, m, "n_m2")?,
        param(p, m, "K2")?,
    )))
}

fn build_tslangmuir(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = TsLangmuir::NAME;
    Ok(Box::new(TsLangmuir::new(
        param(p, m, "n_m1")?,
        param(p, m, "n_m2")?,
        param(p, m, "n_m3")?,
        param(p, m, "K1")?,
        param(p, m, "K2")?,
        param(p, m, "K3")?,
    )))
}

fn build_quadratic(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = Quadratic::NAME;
    Ok(Box::new(Quadratic::new(
        param(p, m, "n_m")?,
        param(p, m, "Ka")?,
        param(p, m, "Kb")?,
    )))
}

fn build_bet(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = Bet::NAME;
    Ok(Box::new(Bet::new(
        param(p, m, "n_m")?,
        param(p, m, "C")?,
        param(p, m, "N")?,
    )))
}

fn build_gab(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = Gab::NAME;
    Ok(Box::new(Gab::new(
        param(p, m, "n_m")?,
        param(p, m, "C")?,
        param(p, m, "K")?,
    )))
}

fn build_freundlich(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = Freundlich::NAME;
    Ok(Box::new(Freundlich::new(
        param(p, m, "K")?,
        param(p, m, "m")?,
    )))
}

fn build_dr(p: &[(&str, Real)], t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = DubininRadushkevich::NAME;
    Ok(Box::new(DubininRadushkevich::new(
        param(p, m, "n_m")?,
        param(p, m, "e")?,
        temperature_for(m, t)?,
    )))
}

fn build_da(p: &[(&str, Real)], t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = DubininAstakhov::NAME;
    Ok(Box::new(DubininAstakhov::new(
        param(p, m, "n_m")?,
        param(p, m, "e")?,
        param(p, m, "m")?,
        temperature_for(m, t)?,
    )))
}

fn build_temkin(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = TemkinApprox::NAME;
    Ok(Box::new(TemkinApprox::new(
        param(p, m, "n_m")?,
        param(p, m, "K")?,
        param(p, m, "tht")?,
    )))
}

fn build_toth(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = Toth::NAME;
    Ok(Box::new(Toth::new(
        param(p, m, "n_m")?,
        param(p, m, "K")?,
        param(p, m, "t")?,
    )))
}

fn build_dstoth(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = DsToth::NAME;
    Ok(Box::new(DsToth::new(
        param(p, m, "n_m1")?,
        param(p, m, "K1")?,
        param(p, m, "t1")?,
        param(p, m, "n_m2")?,
        param(p, m, "K2")?,
        param(p, m, "t2")?,
    )))
}

fn build_jensenseaton(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = JensenSeaton::NAME;
    Ok(Box::new(JensenSeaton::new(
        param(p, m, "K")?,
        param(p, m, "a")?,
        param(p, m, "b")?,
        param(p, m, "c")?,
    )))
}

fn build_virial(p: &[(&str, Real)], _t: Option<Real>) -> ModelResult<Box<dyn IsothermModel>> {
    let m = Virial::NAME;
    Ok(Box::new(Virial::new(
        param(p, m, "K")?,
        param(p, m, "A")?,
        param(p, m, "B")?,
        param(p, m, "C")?,
    )))
}

fn build_chemiphysisorption(
    p: &[(&str, Real)],
    t: Option<Real>,
) -> ModelResult<Box<dyn IsothermModel>> {
    let m = ChemiPhysisorption::NAME;
    Ok(Box::new(ChemiPhysisorption::new(
        param(p, m, "n_m1")?,
        param(p, m, "K1")?,
        param(p, m, "t1")?,
        param(p, m, "n_m2")?,
        param(p, m, "K2")?,
        param(p, m, "Ea")?,
        temperature_for(m, t)?,
    )))
}

pub static MODEL_CATALOG: [ModelCatalogEntry; 16] = [
    ModelCatalogEntry {
        name: Henry::NAME,
        iast_eligible: true,
        guessable: true,
        factory: build_henry,
    },
    ModelCatalogEntry {
        name: Langmuir::NAME,
        iast_eligible: true,
        guessable: true,
        factory: build_langmuir,
    },
    ModelCatalogEntry {
        name: DsLangmuir::NAME,
        iast_eligible: true,
        guessable: true,
        factory: build_dslangmuir,
    },
    ModelCatalogEntry {
        name: TsLangmuir::NAME,
        iast_eligible: true,
        guessable: false,
        factory: build_tslangmuir,
    },
    ModelCatalogEntry {
        name: Quadratic::NAME,
        iast_eligible: true,
        guessable: true,
        factory: build_quadratic,
    },
    ModelCatalogEntry {
        name: Bet::NAME,
        iast_eligible: true,
        guessable: true,
        factory: build_bet,
    },
    ModelCatalogEntry {
        name: Gab::NAME,
        iast_eligible: false,
        guessable: false,
        factory: build_gab,
    },
    ModelCatalogEntry {
        name: Freundlich::NAME,
        iast_eligible: false,
        guessable: true,
        factory: build_freundlich,
    },
    ModelCatalogEntry {
        name: DubininRadushkevich::NAME,
        iast_eligible: false,
        guessable: true,
        factory: build_dr,
    },
    ModelCatalogEntry {
        name: DubininAstakhov::NAME,
        iast_eligible: false,
        guessable: false,
        factory: build_da,
    },
    ModelCatalogEntry {
        name: TemkinApprox::NAME,
        iast_eligible: true,
        guessable: true,
        factory: build_temkin,
    },
    ModelCatalogEntry {
        name: Toth::NAME,
        iast_eligible: true,
        guessable: true,
        factory: build_toth,
    },
    ModelCatalogEntry {
        name: DsToth::NAME,
        iast_eligible: false,
        guessable: false,
        factory: build_dstoth,
    },
    ModelCatalogEntry {
        name: JensenSeaton::NAME,
        iast_eligible: true,
        guessable: true,
        factory: build_jensenseaton,
    },
    ModelCatalogEntry {
        name: Virial::NAME,
        iast_eligible: false,
        guessable: false,
        factory: build_virial,
    },
    ModelCatalogEntry {
        name: ChemiPhysisorption::NAME,
        iast_eligible: false,
        guessable: false,
        factory: build_chemiphysisorption,
    },
];

/// Look up a catalog row by name, ignoring case.
pub fn catalog_entry(name: &str) -> ModelResult<&'static ModelCatalogEntry> {
    MODEL_CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ModelError::UnknownModel {
            name: name.to_string(),
        })
}

/// Build a model by name from named parameters. `temperature` is only
/// consulted by the models whose equations contain `RT`.
pub fn model_from_params(
    name: &str,
    params: &[(&str, Real)],
    temperature: Option<Real>,
) -> ModelResult<Box<dyn IsothermModel>> {
    let entry = catalog_entry(name)?;
    (entry.factory)(params, temperature)
}

/// Whether the named model may participate in adsorbed-solution
/// calculations.
pub fn is_iast_model(name: &str) -> bool {
    catalog_entry(name).map(|e| e.iast_eligible).unwrap_or(false)
}
