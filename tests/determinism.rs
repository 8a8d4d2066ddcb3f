use cellar::{count_options, derive_options, Cellar, FilterState, RangeFilter, WineRecord};

fn catalog() -> Vec<WineRecord> {
    let countries = ["France", "Italy", "Spain", "Chile", "Argentina"];
    let grapes = ["Pinot Noir", "Sangiovese", "Tempranillo", "Carmenere", "Malbec"];
    (0..60)
        .map(|i| {
            let mut wine = WineRecord::new(format!("{} Reserve {i}", grapes[i % 5]))
                .with_wine_type(if i % 3 == 0 { "White" } else { "Red" })
                .with_country(countries[i % 5])
                .with_subregion(format!("Region {}", i % 7))
                .with_grape(grapes[(i + 1) % 5])
                .with_aromas(["oak", "cherry", "citrus"][..(i % 3) + 1].iter().copied());
            if i % 4 != 0 {
                wine = wine.with_vintage(2010 + (i % 12) as i32);
            }
            if i % 5 != 0 {
                wine = wine.with_price(10_000 * (i as u64 + 1));
            }
            wine
        })
        .collect()
}

fn names(hits: &[&WineRecord]) -> Vec<String> {
    hits.iter().map(|r| r.name.clone()).collect()
}

#[test]
fn repeated_browse_gives_identical_results() {
    let cellar = Cellar::new(catalog());
    let mut state = FilterState::default();
    cellar.toggle_country(&mut state, "Italy");
    cellar.toggle_country(&mut state, "Chile");
    state.set_price_range(RangeFilter::new(50_000, 450_000));

    let first = names(&cellar.browse(&state, "sangiovese"));
    assert!(!first.is_empty());
    for _ in 0..10 {
        assert_eq!(names(&cellar.browse(&state, "sangiovese")), first);
    }
}

#[test]
fn independent_cellars_agree() {
    let a = Cellar::new(catalog());
    let b = Cellar::new(catalog());
    let mut state = FilterState::default();
    state.toggle_aroma("citrus");
    state.toggle_vintage(2015);

    assert_eq!(names(&a.filter(&state)), names(&b.filter(&state)));
    assert_eq!(names(&a.search("malbek")), names(&b.search("malbek")));
}

#[test]
fn options_ignore_record_order() {
    let forward = catalog();
    let mut reversed = catalog();
    reversed.reverse();

    assert_eq!(derive_options(&forward), derive_options(&reversed));
    assert_eq!(count_options(&forward), count_options(&reversed));
}

#[test]
fn cellar_is_shareable_across_threads() {
    let cellar = Cellar::new(catalog());
    let expected = names(&cellar.search("tempranilo"));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| names(&cellar.search("tempranilo"))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
