///////////////////////////////////////////////////////////////////////
// Schools
///////////////////////////////////////////////////////////////////////

table! {
    schools (id) {
        id -> BigInt,
        name -> Text,
        address -> Text,
        latitude -> Double,
        longitude -> Double,
    }
}
