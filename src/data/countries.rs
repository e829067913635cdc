//! Static country table: ISO 3166-1 alpha-2 code, continent, and the names
//! (common, official, and frequent alternates) that resolve to it.

use super::region::Region;

const AF: Region = Region::Africa;
const AS: Region = Region::Asia;
const EU: Region = Region::Europe;
const NA: Region = Region::NorthAmerica;
const SA: Region = Region::SouthAmerica;
const OC: Region = Region::Oceania;
const AN: Region = Region::Antarctica;

pub(super) static COUNTRIES: &[(&str, Region, &[&str])] = &[
    ("AD", EU, &["Andorra"]),
    ("AE", AS, &["United Arab Emirates", "UAE"]),
    ("AF", AS, &["Afghanistan"]),
    ("AG", NA, &["Antigua and Barbuda"]),
    ("AI", NA, &["Anguilla"]),
    ("AL", EU, &["Albania"]),
    ("AM", AS, &["Armenia"]),
    ("AO", AF, &["Angola"]),
    ("AQ", AN, &["Antarctica"]),
    ("AR", SA, &["Argentina"]),
    ("AS", OC, &["American Samoa"]),
    ("AT", EU, &["Austria"]),
    ("AU", OC, &["Australia"]),
    ("AW", NA, &["Aruba"]),
    ("AX", EU, &["Aland Islands", "Åland Islands"]),
    ("AZ", AS, &["Azerbaijan"]),
    ("BA", EU, &["Bosnia and Herzegovina", "Bosnia & Herzegovina", "Bosnia"]),
    ("BB", NA, &["Barbados"]),
    ("BD", AS, &["Bangladesh"]),
    ("BE", EU, &["Belgium"]),
    ("BF", AF, &["Burkina Faso"]),
    ("BG", EU, &["Bulgaria"]),
    ("BH", AS, &["Bahrain"]),
    ("BI", AF, &["Burundi"]),
    ("BJ", AF, &["Benin"]),
    ("BL", NA, &["Saint Barthelemy", "Saint Barthélemy"]),
    ("BM", NA, &["Bermuda"]),
    ("BN", AS, &["Brunei", "Brunei Darussalam"]),
    ("BO", SA, &["Bolivia", "Bolivia, Plurinational State of", "Plurinational State of Bolivia"]),
    ("BQ", NA, &["Bonaire, Sint Eustatius and Saba", "Caribbean Netherlands"]),
    ("BR", SA, &["Brazil"]),
    ("BS", NA, &["Bahamas", "The Bahamas"]),
    ("BT", AS, &["Bhutan"]),
    ("BV", AN, &["Bouvet Island"]),
    ("BW", AF, &["Botswana"]),
    ("BY", EU, &["Belarus"]),
    ("BZ", NA, &["Belize"]),
    ("CA", NA, &["Canada"]),
    ("CC", AS, &["Cocos (Keeling) Islands", "Cocos Islands"]),
    ("CD", AF, &["Democratic Republic of the Congo", "Congo, The Democratic Republic of the", "DR Congo", "DRC", "Congo-Kinshasa"]),
    ("CF", AF, &["Central African Republic"]),
    ("CG", AF, &["Republic of the Congo", "Congo", "Congo-Brazzaville"]),
    ("CH", EU, &["Switzerland"]),
    ("CI", AF, &["Cote d'Ivoire", "Côte d'Ivoire", "Ivory Coast"]),
    ("CK", OC, &["Cook Islands"]),
    ("CL", SA, &["Chile"]),
    ("CM", AF, &["Cameroon"]),
    ("CN", AS, &["China", "People's Republic of China"]),
    ("CO", SA, &["Colombia"]),
    ("CR", NA, &["Costa Rica"]),
    ("CU", NA, &["Cuba"]),
    ("CV", AF, &["Cabo Verde", "Cape Verde"]),
    ("CW", NA, &["Curacao", "Curaçao"]),
    ("CX", AS, &["Christmas Island"]),
    ("CY", AS, &["Cyprus"]),
    ("CZ", EU, &["Czechia", "Czech Republic"]),
    ("DE", EU, &["Germany"]),
    ("DJ", AF, &["Djibouti"]),
    ("DK", EU, &["Denmark"]),
    ("DM", NA, &["Dominica"]),
    ("DO", NA, &["Dominican Republic"]),
    ("DZ", AF, &["Algeria"]),
    ("EC", SA, &["Ecuador"]),
    ("EE", EU, &["Estonia"]),
    ("EG", AF, &["Egypt"]),
    ("ER", AF, &["Eritrea"]),
    ("ES", EU, &["Spain"]),
    ("ET", AF, &["Ethiopia"]),
    ("FI", EU, &["Finland"]),
    ("FJ", OC, &["Fiji"]),
    ("FK", SA, &["Falkland Islands", "Falkland Islands (Malvinas)"]),
    ("FM", OC, &["Micronesia", "Micronesia, Federated States of", "Federated States of Micronesia"]),
    ("FO", EU, &["Faroe Islands"]),
    ("FR", EU, &["France"]),
    ("GA", AF, &["Gabon"]),
    ("GB", EU, &["United Kingdom", "UK", "Great Britain", "England", "Scotland", "Wales", "Northern Ireland"]),
    ("GD", NA, &["Grenada"]),
    ("GE", AS, &["Georgia"]),
    ("GF", SA, &["French Guiana"]),
    ("GG", EU, &["Guernsey"]),
    ("GH", AF, &["Ghana"]),
    ("GI", EU, &["Gibraltar"]),
    ("GL", NA, &["Greenland"]),
    ("GM", AF, &["Gambia", "The Gambia"]),
    ("GN", AF, &["Guinea"]),
    ("GP", NA, &["Guadeloupe"]),
    ("GQ", AF, &["Equatorial Guinea"]),
    ("GR", EU, &["Greece"]),
    ("GS", AN, &["South Georgia and the South Sandwich Islands"]),
    ("GT", NA, &["Guatemala"]),
    ("GU", OC, &["Guam"]),
    ("GW", AF, &["Guinea-Bissau", "Guinea Bissau"]),
    ("GY", SA, &["Guyana"]),
    ("HK", AS, &["Hong Kong"]),
    ("HN", NA, &["Honduras"]),
    ("HR", EU, &["Croatia"]),
    ("HT", NA, &["Haiti"]),
    ("HU", EU, &["Hungary"]),
    ("ID", AS, &["Indonesia"]),
    ("IE", EU, &["Ireland"]),
    ("IL", AS, &["Israel"]),
    ("IM", EU, &["Isle of Man"]),
    ("IN", AS, &["India"]),
    ("IO", AS, &["British Indian Ocean Territory"]),
    ("IQ", AS, &["Iraq"]),
    ("IR", AS, &["Iran", "Iran, Islamic Republic of", "Islamic Republic of Iran"]),
    ("IS", EU, &["Iceland"]),
    ("IT", EU, &["Italy"]),
    ("JE", EU, &["Jersey"]),
    ("JM", NA, &["Jamaica"]),
    ("JO", AS, &["Jordan"]),
    ("JP", AS, &["Japan"]),
    ("KE", AF, &["Kenya"]),
    ("KG", AS, &["Kyrgyzstan", "Kyrgyz Republic"]),
    ("KH", AS, &["Cambodia"]),
    ("KI", OC, &["Kiribati"]),
    ("KM", AF, &["Comoros"]),
    ("KN", NA, &["Saint Kitts and Nevis"]),
    ("KP", AS, &["North Korea", "Korea, Democratic People's Republic of", "Democratic People's Republic of Korea"]),
    ("KR", AS, &["South Korea", "Korea, Republic of", "Republic of Korea", "Korea"]),
    ("KW", AS, &["Kuwait"]),
    ("KY", NA, &["Cayman Islands"]),
    ("KZ", AS, &["Kazakhstan"]),
    ("LA", AS, &["Laos", "Lao People's Democratic Republic", "Lao PDR"]),
    ("LB", AS, &["Lebanon"]),
    ("LC", NA, &["Saint Lucia"]),
    ("LI", EU, &["Liechtenstein"]),
    ("LK", AS, &["Sri Lanka"]),
    ("LR", AF, &["Liberia"]),
    ("LS", AF, &["Lesotho"]),
    ("LT", EU, &["Lithuania"]),
    ("LU", EU, &["Luxembourg"]),
    ("LV", EU, &["Latvia"]),
    ("LY", AF, &["Libya"]),
    ("MA", AF, &["Morocco"]),
    ("MC", EU, &["Monaco"]),
    ("MD", EU, &["Moldova", "Moldova, Republic of", "Republic of Moldova"]),
    ("ME", EU, &["Montenegro"]),
    ("MF", NA, &["Saint Martin", "Saint Martin (French part)"]),
    ("MG", AF, &["Madagascar"]),
    ("MH", OC, &["Marshall Islands"]),
    ("MK", EU, &["North Macedonia", "Macedonia", "Republic of North Macedonia"]),
    ("ML", AF, &["Mali"]),
    ("MM", AS, &["Myanmar", "Burma", "Myanmar (Burma)"]),
    ("MN", AS, &["Mongolia"]),
    ("MO", AS, &["Macao", "Macau"]),
    ("MP", OC, &["Northern Mariana Islands"]),
    ("MQ", NA, &["Martinique"]),
    ("MR", AF, &["Mauritania"]),
    ("MS", NA, &["Montserrat"]),
    ("MT", EU, &["Malta"]),
    ("MU", AF, &["Mauritius"]),
    ("MV", AS, &["Maldives"]),
    ("MW", AF, &["Malawi"]),
    ("MX", NA, &["Mexico"]),
    ("MY", AS, &["Malaysia"]),
    ("MZ", AF, &["Mozambique"]),
    ("NA", AF, &["Namibia"]),
    ("NC", OC, &["New Caledonia"]),
    ("NE", AF, &["Niger"]),
    ("NF", OC, &["Norfolk Island"]),
    ("NG", AF, &["Nigeria"]),
    ("NI", NA, &["Nicaragua"]),
    ("NL", EU, &["Netherlands", "The Netherlands", "Holland"]),
    ("NO", EU, &["Norway"]),
    ("NP", AS, &["Nepal"]),
    ("NR", OC, &["Nauru"]),
    ("NU", OC, &["Niue"]),
    ("NZ", OC, &["New Zealand"]),
    ("OM", AS, &["Oman"]),
    ("PA", NA, &["Panama"]),
    ("PE", SA, &["Peru"]),
    ("PF", OC, &["French Polynesia"]),
    ("PG", OC, &["Papua New Guinea"]),
    ("PH", AS, &["Philippines", "The Philippines"]),
    ("PK", AS, &["Pakistan"]),
    ("PL", EU, &["Poland"]),
    ("PM", NA, &["Saint Pierre and Miquelon"]),
    ("PN", OC, &["Pitcairn", "Pitcairn Islands"]),
    ("PR", NA, &["Puerto Rico"]),
    ("PT", EU, &["Portugal"]),
    ("PW", OC, &["Palau"]),
    ("PY", SA, &["Paraguay"]),
    ("QA", AS, &["Qatar"]),
    ("RE", AF, &["Reunion", "Réunion"]),
    ("RO", EU, &["Romania"]),
    ("RS", EU, &["Serbia"]),
    ("RU", EU, &["Russia", "Russian Federation"]),
    ("RW", AF, &["Rwanda"]),
    ("SA", AS, &["Saudi Arabia"]),
    ("SB", OC, &["Solomon Islands"]),
    ("SC", AF, &["Seychelles"]),
    ("SD", AF, &["Sudan"]),
    ("SE", EU, &["Sweden"]),
    ("SG", AS, &["Singapore"]),
    ("SH", AF, &["Saint Helena", "Saint Helena, Ascension and Tristan da Cunha"]),
    ("SI", EU, &["Slovenia"]),
    ("SJ", EU, &["Svalbard and Jan Mayen"]),
    ("SK", EU, &["Slovakia", "Slovak Republic"]),
    ("SL", AF, &["Sierra Leone"]),
    ("SM", EU, &["San Marino"]),
    ("SN", AF, &["Senegal"]),
    ("SO", AF, &["Somalia"]),
    ("SR", SA, &["Suriname"]),
    ("SS", AF, &["South Sudan"]),
    ("ST", AF, &["Sao Tome and Principe", "São Tomé and Príncipe"]),
    ("SV", NA, &["El Salvador"]),
    ("SX", NA, &["Sint Maarten", "Sint Maarten (Dutch part)"]),
    ("SY", AS, &["Syria", "Syrian Arab Republic"]),
    ("SZ", AF, &["Eswatini", "Swaziland"]),
    ("TC", NA, &["Turks and Caicos Islands"]),
    ("TD", AF, &["Chad"]),
    ("TF", AN, &["French Southern Territories"]),
    ("TG", AF, &["Togo"]),
    ("TH", AS, &["Thailand"]),
    ("TJ", AS, &["Tajikistan"]),
    ("TK", OC, &["Tokelau"]),
    ("TL", AS, &["Timor-Leste", "East Timor"]),
    ("TM", AS, &["Turkmenistan"]),
    ("TN", AF, &["Tunisia"]),
    ("TO", OC, &["Tonga"]),
    ("TR", AS, &["Turkey", "Türkiye", "Turkiye"]),
    ("TT", NA, &["Trinidad and Tobago"]),
    ("TV", OC, &["Tuvalu"]),
    ("TW", AS, &["Taiwan", "Taiwan, Province of China"]),
    ("TZ", AF, &["Tanzania", "Tanzania, United Republic of", "United Republic of Tanzania"]),
    ("UA", EU, &["Ukraine"]),
    ("UG", AF, &["Uganda"]),
    ("UM", OC, &["United States Minor Outlying Islands"]),
    ("US", NA, &["United States", "United States of America", "USA", "US"]),
    ("UY", SA, &["Uruguay"]),
    ("UZ", AS, &["Uzbekistan"]),
    ("VA", EU, &["Holy See", "Vatican City", "Holy See (Vatican City State)"]),
    ("VC", NA, &["Saint Vincent and the Grenadines"]),
    ("VE", SA, &["Venezuela", "Venezuela, Bolivarian Republic of"]),
    ("VG", NA, &["British Virgin Islands", "Virgin Islands, British"]),
    ("VI", NA, &["U.S. Virgin Islands", "Virgin Islands, U.S."]),
    ("VN", AS, &["Vietnam", "Viet Nam"]),
    ("VU", OC, &["Vanuatu"]),
    ("WF", OC, &["Wallis and Futuna"]),
    ("WS", OC, &["Samoa"]),
    ("YE", AS, &["Yemen"]),
    ("YT", AF, &["Mayotte"]),
    ("ZA", AF, &["South Africa"]),
    ("ZM", AF, &["Zambia"]),
    ("ZW", AF, &["Zimbabwe"]),
];
