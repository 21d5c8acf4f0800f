// Property-based tests for the generic listing: the filter-then-paginate
// round trip and the reference search scenario.

use proptest::prelude::*;

use recupera::core::listing::{matches_query, paginate};

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Comércio Silva Ltda",
        "Silva & Filhos ME",
        "Transportes da Silva",
        "Padaria Central",
        "Construtora Horizonte",
        "Mercado São José",
        "Auto Peças Paulista",
        "Clínica Vida",
    ])
    .prop_map(String::from)
}

proptest! {
    #[test]
    fn test_pages_reassemble_the_filtered_set(
        names in prop::collection::vec(name_strategy(), 0..40),
        query in prop::sample::select(vec!["", "silva", "SILVA", "central", "xyz"]),
        page_size in 1u32..10u32
    ) {
        let filtered: Vec<String> = names
            .iter()
            .filter(|name| matches_query(query, &[name.as_str()]))
            .cloned()
            .collect();

        let total_pages = paginate(filtered.clone(), 1, page_size)?.total_pages;

        let mut reassembled = Vec::new();
        for page in 1..=total_pages {
            let chunk = paginate(filtered.clone(), page, page_size)?;
            prop_assert!(chunk.items.len() as u32 <= page_size);
            reassembled.extend(chunk.items);
        }

        // No duplicates, no omissions, original order preserved
        prop_assert_eq!(reassembled, filtered.clone());

        // One page past the end is empty, never an error
        let past_end = paginate(filtered, total_pages + 1, page_size)?;
        prop_assert!(past_end.items.is_empty());
    }

    #[test]
    fn test_empty_query_keeps_everything(
        names in prop::collection::vec(name_strategy(), 0..40)
    ) {
        let kept = names
            .iter()
            .filter(|name| matches_query("", &[name.as_str()]))
            .count();
        prop_assert_eq!(kept, names.len());
    }
}

#[test]
fn test_reference_scenario_silva_paging() {
    let clients = vec![
        "Comércio Silva Ltda",
        "Padaria Central",
        "Silva & Filhos ME",
        "Construtora Horizonte",
        "Mercado São José",
        "Transportes da Silva",
        "Auto Peças Paulista",
        "Clínica Vida",
        "Restaurante Sabor",
        "Farmácia Popular",
        "Gráfica Moderna",
        "Escola Futuro",
    ];
    assert_eq!(clients.len(), 12);

    let filtered: Vec<&str> = clients
        .iter()
        .copied()
        .filter(|name| matches_query("silva", &[*name]))
        .collect();
    assert_eq!(filtered.len(), 3);

    let page1 = paginate(filtered.clone(), 1, 2).unwrap();
    assert_eq!(page1.items.len(), 2);
    assert_eq!(page1.total_pages, 2);
    assert_eq!(page1.total_items, 3);

    let page2 = paginate(filtered.clone(), 2, 2).unwrap();
    assert_eq!(page2.items.len(), 1);

    let page3 = paginate(filtered, 3, 2).unwrap();
    assert!(page3.items.is_empty());
}
