//! Integration tests for glycan-tools
//!
//! These tests verify end-to-end functionality of the grammar, the catalog
//! index, identifier resolution and the search engine against a fixture
//! dataset.

use glycan_tools::{
    convert::{IupacConversion, IupacConverter, NoOpConverter},
    error::Result,
    grammar,
    model::{Anomer, GlycanCatalog},
    resolve::{MatchChannel, NoPresenceProbe, ResolutionService},
    search::{GlycanClass, SearchEngine},
    NotationKind, SearchConfig,
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_catalog() -> GlycanCatalog {
    let path = Path::new(FIXTURES_DIR).join("catalog.json");
    GlycanCatalog::from_path(&path).expect("fixture catalog loads")
}

/// Converter returning a canned WURCS for every IUPAC input.
struct CannedConverter(&'static str);

impl IupacConverter for CannedConverter {
    fn iupac_to_wurcs(&self, _iupac: &str) -> Result<IupacConversion> {
        Ok(IupacConversion {
            glytoucan: None,
            wurcs: Some(self.0.to_string()),
        })
    }
    fn name(&self) -> &'static str {
        "Canned"
    }
    fn is_available(&self) -> bool {
        true
    }
}

// ============================================================================
// Grammar Tests
// ============================================================================

mod grammar_tests {
    use super::*;

    #[test]
    fn test_glycam_to_iupac_matches_catalog_iupac() {
        let catalog = fixture_catalog();
        // Converting the stored GLYCAM names reproduces the stored IUPAC
        for id in ["GS00001", "GS00002", "GS00004"] {
            let record = catalog.get(id).expect("record present");
            let glycam = record.archetype.glycam.as_deref().expect("glycam stored");
            let iupac = record.archetype.iupac.as_deref().expect("iupac stored");
            assert_eq!(
                grammar::to_iupac(grammar::tidy(glycam)),
                iupac,
                "conversion disagreed for {id}"
            );
        }
    }

    #[test]
    fn test_wurcs_split_invariants_on_catalog_strings() {
        let catalog = fixture_catalog();
        for (id, record) in catalog.records() {
            // GS00007 carries a deliberately inconsistent header
            if id == "GS00007" {
                continue;
            }
            let wurcs = record.archetype.wurcs.as_deref().expect("wurcs stored");
            let breakdown = grammar::wurcs_split(wurcs).expect("catalog WURCS parses");
            assert_eq!(
                breakdown.unique_residues.len(),
                breakdown.unique_residue_count
            );
            assert_eq!(breakdown.residue_sequence.len(), breakdown.residue_count);
            assert_eq!(breakdown.linkages.len(), breakdown.linkage_count);
        }
    }

    #[test]
    fn test_wurcs_split_rejects_missing_section() {
        let err = grammar::wurcs_split("WURCS=2.0/1,1,0/[a2122h-1x_1-5]").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_anomer_derivation_round_trip() {
        let wurcs = "WURCS=2.0/1,1,0/[a2122h-1x_1-5_2*NCC/3=O]/1/";
        let (alpha, beta) = grammar::anomer_variants(wurcs);
        assert!(!alpha.contains('x'));
        assert!(!beta.contains('x'));
        // Substituting back at the placeholder position restores the input
        assert_eq!(alpha.replace("-1a_", "-1x_"), wurcs);
        assert_eq!(beta.replace("-1b_", "-1x_"), wurcs);
    }

    #[test]
    fn test_modifier_rewrites_apply_once() {
        let once = grammar::rewrite_modifiers("Gal[3S,6S]");
        let twice = grammar::rewrite_modifiers(&once);
        assert_eq!(once, "Gal3S6S");
        assert_eq!(once, twice);
    }
}

// ============================================================================
// Resolution Tests
// ============================================================================

mod resolution_tests {
    use super::*;

    #[test]
    fn test_glytoucan_precedence_over_structural_channels() {
        let catalog = fixture_catalog();
        let service = ResolutionService::new(&catalog, &NoOpConverter, &NoPresenceProbe);

        let outcome = service.exists("G00028MO");
        assert!(outcome.found);
        assert_eq!(outcome.reason, "GlyTouCan Match (Archetype)");
        assert_eq!(outcome.entry.expect("catalog entry").id, "GS00001");
    }

    #[test]
    fn test_end_to_end_iupac_identifier() {
        // IUPAC identifier, converter returns a WURCS the catalog stores
        // case-insensitively; the derived variants carry no placeholder so
        // derivation is a no-op.
        let identifier = "Man(a1-3)Man(b1-4)GlcNAc(b1-4)GlcNAc";
        assert_eq!(grammar::classify(identifier), NotationKind::Iupac);

        let wurcs = "WURCS=2.0/3,4,3/[a2122h-1b_1-5][a1122h-1a_1-5]/1-2-2-2/a4-b1_b4-c1_c3-d1";
        let (alpha, beta) = grammar::anomer_variants(wurcs);
        assert_eq!(alpha, wurcs);
        assert_eq!(beta, wurcs);

        let catalog = fixture_catalog();
        let converter = CannedConverter(wurcs);
        let service = ResolutionService::new(&catalog, &converter, &NoPresenceProbe);

        let outcome = service.exists(identifier);
        assert!(outcome.found);
        assert_eq!(
            outcome.channel,
            Some(MatchChannel::Wurcs(Anomer::Archetype))
        );
        assert_eq!(outcome.entry.expect("catalog entry").id, "GS00007");
    }

    #[test]
    fn test_not_found_reports_negative_result() {
        let catalog = fixture_catalog();
        let service = ResolutionService::new(&catalog, &NoOpConverter, &NoPresenceProbe);

        let outcome = service.exists("G99999ZZ");
        assert!(!outcome.found);
        assert!(outcome.channel.is_none());
    }

    #[test]
    fn test_record_fetch_by_every_namespace() {
        let catalog = fixture_catalog();
        let service = ResolutionService::new(&catalog, &NoOpConverter, &NoPresenceProbe);

        // Internal ID
        assert!(service.record("GS00003").is_some());
        // GlyTouCan accession of the beta variant
        let by_accession = service.record("G41247QY").expect("beta accession");
        assert_eq!(by_accession.archetype.glytoucan.as_deref(), Some("G22768VC"));
        // Exact IUPAC
        assert!(service.record("Gal(b1-3)GalNAc").is_some());
    }

    #[test]
    fn test_file_resolution_prefers_matched_anomer() {
        let catalog = fixture_catalog();
        let service = ResolutionService::new(&catalog, &NoOpConverter, &NoPresenceProbe);

        let alpha = service.entry_for_files("G70213HK").expect("alpha accession");
        assert_eq!(alpha.id, "GS00003");
        assert_eq!(alpha.preferred, Anomer::Alpha);
        assert_eq!(alpha.fallback, Anomer::Beta);

        let archetype = service.entry_for_files("G22768VC").expect("archetype");
        assert_eq!(archetype.preferred, Anomer::Beta);
        assert_eq!(archetype.fallback, Anomer::Alpha);
    }

    #[test]
    fn test_available_accessions_cover_all_variants() {
        let catalog = fixture_catalog();
        let accessions = catalog.available_accessions();
        assert!(accessions.contains(&"G00028MO"));
        assert!(accessions.contains(&"G70213HK"));
        assert!(accessions.contains(&"G41247QY"));
        // GS00007 has none; GS00006 archetype only
        assert_eq!(accessions.len(), 16);
    }
}

// ============================================================================
// Search Tests
// ============================================================================

mod search_tests {
    use super::*;

    #[test]
    fn test_structural_search_ranks_exact_match_first() {
        let catalog = fixture_catalog();
        let engine = SearchEngine::new(&catalog, SearchConfig::default());

        let query =
            "WURCS=2.0/2,2,1/[a2122h-1b_1-5_2*NCC/3=O][a2122h-1x_1-5_2*NCC/3=O]/1-2/a4-b1";
        let hits = engine.structural(query).expect("query parses");

        assert_eq!(hits[0].id, "GS00002");
        assert_eq!(hits[0].score, Some(400.0));
        // Scores come back descending
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(hits.len() <= 10);
    }

    #[test]
    fn test_structural_count_agreement_dominates() {
        let catalog = fixture_catalog();
        let engine = SearchEngine::new(&catalog, SearchConfig::default());

        // Disaccharide query: the two disaccharide records must outrank the
        // heptasaccharides on count agreement alone
        let query = "WURCS=2.0/2,2,1/[a2112h-1x_1-5_2*NCC/3=O][a2112h-1b_1-5]/1-2/a3-b1";
        let hits = engine.structural(query).expect("query parses");

        let top_ids: Vec<&str> = hits.iter().take(3).map(|h| h.id.as_str()).collect();
        assert!(top_ids.contains(&"GS00005"));
        assert!(top_ids.contains(&"GS00002"));
        assert!(top_ids.contains(&"GS00006"));
    }

    #[test]
    fn test_free_text_fallback_thresholds_and_order() {
        let catalog = fixture_catalog();
        let engine = SearchEngine::new(&catalog, SearchConfig::default());

        let hits = engine.text("mannose high");
        assert!(!hits.is_empty());
        assert!(hits.len() <= 20);
        // Every kept hit cleared the score threshold
        for hit in &hits {
            assert!(hit.score.expect("scored") > 50.0);
        }
        // Sorted descending
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // The oligomannose record is among the hits
        assert!(hits.iter().any(|h| h.id == "GS00003"));
    }

    #[test]
    fn test_category_filters() {
        let catalog = fixture_catalog();
        let engine = SearchEngine::new(&catalog, SearchConfig::default());

        let n_glycans: Vec<String> = engine
            .category(GlycanClass::NGlycans)
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(n_glycans, ["GS00003", "GS00004"]);

        let oligo: Vec<String> = engine
            .category(GlycanClass::Oligomannose)
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(oligo, ["GS00003"]);

        let complex: Vec<String> = engine
            .category(GlycanClass::Complex)
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(complex, ["GS00004"]);

        let gags: Vec<String> = engine
            .category(GlycanClass::Gags)
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(gags, ["GS00006"]);
    }

    #[test]
    fn test_end_residue_search_sorted_by_mass() {
        let catalog = fixture_catalog();
        let engine = SearchEngine::new(&catalog, SearchConfig::default());

        let hits = engine.end_residue("GlcNAc");
        // GlcNAc, chitobiose, Man5, biantennary all end in GlcNAc
        assert_eq!(hits.len(), 4);
        let masses: Vec<f64> = hits.iter().map(|h| h.mass.expect("mass")).collect();
        for pair in masses.windows(2) {
            assert!(pair[0] <= pair[1], "masses not ascending: {masses:?}");
        }
        assert_eq!(hits[0].id, "GS00001");
    }

    #[test]
    fn test_search_ranking_score_gap_property() {
        // Two candidates differing only in linkage count by one: the exact
        // match scores at least 100 higher (50 bonus vs -10 penalty twice
        // over residue and linkage counts is bounded below by 100).
        let config = SearchConfig::default();
        let query = grammar::wurcs_split(
            "WURCS=2.0/2,2,1/[a2112h-1x_1-5_2*NCC/3=O][a2112h-1b_1-5]/1-2/a3-b1",
        )
        .expect("query parses");
        let exact = query.clone();
        let near = grammar::wurcs_split(
            "WURCS=2.0/2,2,0/[a2112h-1x_1-5_2*NCC/3=O][a2112h-1b_1-5]/1-2/",
        )
        .expect("near parses");

        let exact_score = glycan_tools::search::score_pair(&query, &exact, &config);
        let near_score = glycan_tools::search::score_pair(&query, &near, &config);
        assert!(
            exact_score - near_score >= 100.0,
            "gap was {}",
            exact_score - near_score
        );
    }
}
