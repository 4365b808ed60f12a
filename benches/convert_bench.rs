use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kml2geojson::convert_kml_to_geojson;

const SINGLE_PLACEMARK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Office</name>
      <Point>
        <coordinates>-122.1,37.4,10</coordinates>
      </Point>
    </Placemark>
  </Document>
</kml>"#;

const STYLED_PLACEMARKS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Fountain</name>
      <ExtendedData>
        <Data><displayName>amenity</displayName><value>fountain</value></Data>
        <Data><displayName>operator</displayName><value>city</value></Data>
      </ExtendedData>
      <Point>
        <coordinates>-122.1,37.4,10</coordinates>
      </Point>
      <Style>
        <IconStyle>
          <color>ff0000ff</color>
          <Icon><href>http://example.com/pin.png</href></Icon>
        </IconStyle>
      </Style>
    </Placemark>
    <Placemark>
      <name>Track</name>
      <Point>
        <coordinates>-122.1,37.4,10 -122.2,37.5,11 -122.3,37.6,12</coordinates>
      </Point>
    </Placemark>
  </Document>
</kml>"#;

fn bench_convert(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");

    c.bench_function("convert_single_placemark", |b| {
        b.iter(|| {
            runtime
                .block_on(convert_kml_to_geojson(black_box(SINGLE_PLACEMARK)))
                .expect("Failed to convert")
        })
    });

    c.bench_function("convert_styled_placemarks", |b| {
        b.iter(|| {
            runtime
                .block_on(convert_kml_to_geojson(black_box(STYLED_PLACEMARKS)))
                .expect("Failed to convert")
        })
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
